use leptos::*;
use leptos_meta::*;
use platform_host_web::build_host_services;
use station_runtime::{station_config, PageProvider, StationPage};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let station = &station_config().station;

    view! {
        <Title text=format!("{} {}", station.name, station.city) />
        <Meta name="description" content=station.tagline.clone() />

        <div class="site-root">
            <StationEntry />
        </div>
    }
}

#[component]
pub fn StationEntry() -> impl IntoView {
    view! {
        <PageProvider host_services=build_host_services()>
            <StationPage />
        </PageProvider>
    }
}
