//! Station configuration loaded from the build-time embedded `station.toml` manifest.

use std::fmt::Display;
use std::sync::OnceLock;

use serde::Deserialize;
use system_ui::IconName;
use thiserror::Error;

use crate::reveal::RevealConfig;

include!(concat!(env!("OUT_DIR"), "/station_manifest_generated.rs"));

const STATION_MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors raised while decoding or validating the station manifest.
pub enum StationConfigError {
    /// The manifest JSON did not match the expected shape.
    #[error("station manifest parse failed: {0}")]
    Parse(String),
    /// The manifest decoded but violates a content rule.
    #[error("station manifest invalid: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Station identity and page copy.
pub struct StationInfo {
    /// Brand name shown in the header and hero.
    pub name: String,
    /// City subtitle.
    pub city: String,
    /// Hero badge text.
    pub on_air_badge: String,
    /// Hero tagline.
    pub tagline: String,
    /// Footer copyright line.
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Icon + label + value triple used by stat tiles and contact rows.
pub struct StatItem {
    /// Icon token, see [`IconName::token`].
    pub icon: String,
    /// Caption.
    pub label: String,
    /// Highlighted value.
    pub value: String,
}

impl StatItem {
    /// Resolved icon.
    pub fn icon_name(&self) -> IconName {
        IconName::from_token(&self.icon).unwrap_or(IconName::Radio)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Feature tile in the about section.
pub struct FeatureItem {
    /// Icon token.
    pub icon: String,
    /// Tile title.
    pub title: String,
    /// Tile body.
    pub description: String,
}

impl FeatureItem {
    /// Resolved icon.
    pub fn icon_name(&self) -> IconName {
        IconName::from_token(&self.icon).unwrap_or(IconName::Sparkles)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Social network link button.
pub struct SocialLink {
    /// Icon token.
    pub icon: String,
    /// Accessible label.
    pub label: String,
}

impl SocialLink {
    /// Resolved icon.
    pub fn icon_name(&self) -> IconName {
        IconName::from_token(&self.icon).unwrap_or(IconName::Radio)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Advertising section copy.
pub struct AdsContent {
    /// Section heading.
    pub heading: String,
    /// Lead paragraph.
    pub lead: String,
    /// Call-to-action label.
    pub cta: String,
    /// Audience stats.
    pub stats: Vec<StatItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Static section content.
pub struct PageContent {
    /// Hero stat tiles.
    pub hero_stats: Vec<StatItem>,
    /// About section feature tiles.
    pub features: Vec<FeatureItem>,
    /// Advertising section.
    pub ads: AdsContent,
    /// Contact rows.
    pub contacts: Vec<StatItem>,
    /// Social buttons.
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Placement and background of one player widget container.
pub struct WidgetContainer {
    /// Placement token understood by the widget (`top`, `right`, `both`).
    pub placement: String,
    /// Background color.
    pub bg: String,
    /// Background opacity in `[0, 1]`.
    pub bg_opacity: f64,
    /// Optional background image (controls container only).
    #[serde(default)]
    pub bg_img: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryOptions {
    pub show: bool,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShareOptions {
    pub show: bool,
    pub url: String,
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DjOptions {
    pub show: bool,
    pub default_img: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoverOptions {
    pub show: bool,
    pub default_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayButtonOptions {
    pub color: String,
    #[serde(default)]
    pub bg: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VisualizerOptions {
    pub outline_color: String,
    pub bar_width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelOptions {
    pub displayed: Vec<u32>,
    pub switch_bg: String,
    pub switch_color: String,
    pub switch_bg_active: String,
    pub switch_color_active: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VoteOptions {
    pub show: bool,
    pub buttons_color: String,
    pub buttons_opacity: f64,
    pub results_font_color: String,
    pub results_font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgressOptions {
    pub show: bool,
    pub bar_color: String,
    pub bar_bg_color: String,
    pub bar_bg_opacity: f64,
    pub bar_bg_height: u32,
    pub bar_opacity: f64,
    pub font_color: String,
    pub font_size: u32,
    pub bar_bg_radius: u32,
    pub bar_bg_border: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Static attribute configuration for the embedded third-party player widget.
///
/// The widget reads these attributes once when it upgrades its host element; nothing here is
/// reactive.
pub struct PlayerWidgetConfig {
    /// DOM id of the wrapper the widget markup is injected into.
    pub container_id: String,
    /// Widget UI language.
    pub lang: String,
    /// Stream API base URL.
    pub api_url: String,
    /// Stream server id.
    pub server_id: u32,
    /// Station display name.
    pub station_name: String,
    /// Station homepage.
    pub station_url: String,
    /// CSS width of the player.
    pub player_width: String,
    pub image_container: WidgetContainer,
    pub controls_container: WidgetContainer,
    pub history_container: WidgetContainer,
    pub share_container: WidgetContainer,
    pub history: HistoryOptions,
    pub share: ShareOptions,
    pub dj: DjOptions,
    pub cover: CoverOptions,
    pub play_button: PlayButtonOptions,
    pub visualizer: VisualizerOptions,
    pub channels: ChannelOptions,
    pub vote: VoteOptions,
    pub progress: ProgressOptions,
}

fn text(value: impl Display) -> String {
    value.to_string()
}

fn json_list<T: serde::Serialize>(items: &[T]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl PlayerWidgetConfig {
    /// Returns every widget attribute in the order the widget documents them.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let image = &self.image_container;
        let controls = &self.controls_container;
        let history = &self.history_container;
        let share = &self.share_container;
        let progress = &self.progress;
        vec![
            ("lang", self.lang.clone()),
            ("api-url", self.api_url.clone()),
            ("server-id", text(self.server_id)),
            ("station-name", self.station_name.clone()),
            ("station-url", self.station_url.clone()),
            ("imagecontainer", image.placement.clone()),
            ("imagecontainer-bg", image.bg.clone()),
            ("imagecontainer-bg-opacity", text(image.bg_opacity)),
            ("controlscontainer", controls.placement.clone()),
            ("controlscontainer-bg", controls.bg.clone()),
            ("controlscontainer-bg-opacity", text(controls.bg_opacity)),
            (
                "controlscontainer-bg-img",
                controls.bg_img.clone().unwrap_or_default(),
            ),
            ("historycontainer", history.placement.clone()),
            ("historycontainer-bg", history.bg.clone()),
            ("historycontainer-bg-opacity", text(history.bg_opacity)),
            ("show-history", text(self.history.show)),
            ("history-limit", text(self.history.limit)),
            ("sharecontainer", share.placement.clone()),
            ("sharecontainer-bg", share.bg.clone()),
            ("sharecontainer-bg-opacity", text(share.bg_opacity)),
            ("show-share", text(self.share.show)),
            ("share-url", self.share.url.clone()),
            ("share", json_list(&self.share.targets)),
            ("show-dj", text(self.dj.show)),
            ("default-dj-img", self.dj.default_img.clone()),
            ("show-image", text(self.cover.show)),
            ("default-cover-image", self.cover.default_image.clone()),
            ("play-button-color", self.play_button.color.clone()),
            (
                "play-button-bg",
                self.play_button
                    .bg
                    .clone()
                    .unwrap_or_else(|| "null".to_string()),
            ),
            (
                "visualizer-outline-color",
                self.visualizer.outline_color.clone(),
            ),
            ("visualizer-bar-width", text(self.visualizer.bar_width)),
            ("channels-displayed", json_list(&self.channels.displayed)),
            ("channels-switch-bg", self.channels.switch_bg.clone()),
            ("channels-switch-color", self.channels.switch_color.clone()),
            (
                "channels-switch-bg-active",
                self.channels.switch_bg_active.clone(),
            ),
            (
                "channels-switch-color-active",
                self.channels.switch_color_active.clone(),
            ),
            ("show-vote", text(self.vote.show)),
            ("vote-buttons-color", self.vote.buttons_color.clone()),
            ("vote-buttons-opacity", text(self.vote.buttons_opacity)),
            (
                "vote-results-font-color",
                self.vote.results_font_color.clone(),
            ),
            ("vote-results-font-size", text(self.vote.results_font_size)),
            ("progress-show", text(progress.show)),
            ("progress-bar-color", progress.bar_color.clone()),
            ("progress-bar-bg-color", progress.bar_bg_color.clone()),
            ("progress-bar-bg-opacity", text(progress.bar_bg_opacity)),
            ("progress-bar-bg-height", text(progress.bar_bg_height)),
            ("progress-bar-opacity", text(progress.bar_opacity)),
            ("progress-font-color", progress.font_color.clone()),
            ("progress-font-size", text(progress.font_size)),
            ("progress-bar-bg-radius", text(progress.bar_bg_radius)),
            ("progress-bar-bg-border", progress.bar_bg_border.clone()),
            ("player-width", self.player_width.clone()),
        ]
    }

    /// Renders the widget host element with all attributes escaped.
    pub fn to_markup(&self) -> String {
        let mut markup = String::from(r#"<div is="player""#);
        for (name, value) in self.attributes() {
            markup.push(' ');
            markup.push_str(name);
            markup.push_str("=\"");
            markup.push_str(&escape_attribute(&value));
            markup.push('"');
        }
        markup.push_str("></div>");
        markup
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Fully decoded station manifest.
pub struct StationConfig {
    /// Manifest schema version.
    pub schema_version: u32,
    /// Station identity and copy.
    pub station: StationInfo,
    /// Reveal-on-view settings.
    pub reveal: RevealConfig,
    /// Player widget attributes.
    pub player: PlayerWidgetConfig,
    /// Section content.
    pub content: PageContent,
}

impl StationConfig {
    /// Decodes and validates a manifest JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`StationConfigError`] when the payload does not decode or fails validation.
    pub fn parse(raw: &str) -> Result<Self, StationConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| StationConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), StationConfigError> {
        if self.schema_version != STATION_MANIFEST_SCHEMA_VERSION {
            return Err(StationConfigError::Invalid(format!(
                "schema version {} unsupported",
                self.schema_version
            )));
        }
        if self.station.name.trim().is_empty() {
            return Err(StationConfigError::Invalid(
                "station name is empty".to_string(),
            ));
        }
        if !self.player.api_url.starts_with("https://") {
            return Err(StationConfigError::Invalid(format!(
                "player api url `{}` must use https",
                self.player.api_url
            )));
        }
        self.reveal
            .validate()
            .map_err(|err| StationConfigError::Invalid(err.to_string()))?;

        let content = &self.content;
        let icons = content
            .hero_stats
            .iter()
            .chain(&content.ads.stats)
            .chain(&content.contacts)
            .map(|item| item.icon.as_str())
            .chain(content.features.iter().map(|item| item.icon.as_str()))
            .chain(content.socials.iter().map(|item| item.icon.as_str()));
        for icon in icons {
            if IconName::from_token(icon).is_none() {
                return Err(StationConfigError::Invalid(format!(
                    "unknown icon token `{icon}`"
                )));
            }
        }
        Ok(())
    }
}

/// Returns the generated station manifest JSON payload.
pub fn station_manifest_json() -> &'static str {
    STATION_MANIFEST_JSON
}

/// Returns the decoded built-in station configuration.
pub fn station_config() -> &'static StationConfig {
    static CONFIG: OnceLock<StationConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        StationConfig::parse(STATION_MANIFEST_JSON)
            .expect("generated station manifest should parse")
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    fn manifest_with(edit: impl FnOnce(&mut Value)) -> String {
        let mut value: Value =
            serde_json::from_str(station_manifest_json()).expect("manifest json");
        edit(&mut value);
        value.to_string()
    }

    #[test]
    fn builtin_manifest_decodes_station_content() {
        let config = station_config();
        assert_eq!(config.station.name, "POPFM");
        assert_eq!(config.station.city, "Биробиджан");
        assert_eq!(config.content.hero_stats.len(), 3);
        assert_eq!(config.content.features.len(), 4);
        assert_eq!(config.content.ads.stats.len(), 3);
        assert_eq!(config.content.contacts.len(), 4);
        assert_eq!(config.content.socials.len(), 3);
        assert_eq!(config.content.hero_stats[1].icon_name(), IconName::Users);
        assert_eq!(config.reveal, RevealConfig::default());
    }

    #[test]
    fn player_attributes_follow_widget_order_and_formats() {
        let attributes = station_config().player.attributes();
        assert_eq!(attributes.len(), 52);
        assert_eq!(attributes[0], ("lang", "ru".to_string()));
        assert_eq!(
            attributes.last(),
            Some(&("player-width", "870px".to_string()))
        );

        let lookup = |name: &str| {
            attributes
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.as_str())
        };
        assert_eq!(lookup("server-id"), Some("1"));
        assert_eq!(lookup("imagecontainer-bg-opacity"), Some("0"));
        assert_eq!(lookup("sharecontainer-bg-opacity"), Some("1"));
        assert_eq!(lookup("progress-bar-opacity"), Some("0.2"));
        assert_eq!(lookup("channels-displayed"), Some("[1,11,20,29]"));
        assert_eq!(lookup("share"), Some("[]"));
        assert_eq!(lookup("play-button-bg"), Some("null"));
        assert_eq!(lookup("controlscontainer-bg-img"), Some(""));
        assert_eq!(lookup("show-history"), Some("true"));
        assert_eq!(lookup("show-vote"), Some("false"));
    }

    #[test]
    fn player_markup_lists_each_attribute_once() {
        let player = &station_config().player;
        let markup = player.to_markup();
        assert!(markup.starts_with(r#"<div is="player" lang="ru""#));
        assert!(markup.ends_with("></div>"));
        for (name, _) in player.attributes() {
            assert_eq!(
                markup.matches(&format!(" {name}=\"")).count(),
                1,
                "attribute {name}"
            );
        }
    }

    #[test]
    fn player_markup_escapes_attribute_values() {
        let mut player = station_config().player.clone();
        player.station_name = r#"Pop "FM" & <Co>"#.to_string();
        let markup = player.to_markup();
        assert!(markup.contains(r#"station-name="Pop &quot;FM&quot; &amp; &lt;Co&gt;""#));
    }

    #[test]
    fn parse_rejects_unknown_icon_token() {
        let raw = manifest_with(|value| {
            value["content"]["socials"][0]["icon"] = Value::from("myspace");
        });
        assert_eq!(
            StationConfig::parse(&raw),
            Err(StationConfigError::Invalid(
                "unknown icon token `myspace`".to_string()
            ))
        );
    }

    #[test]
    fn parse_rejects_plain_http_stream_api() {
        let raw = manifest_with(|value| {
            value["player"]["api_url"] = Value::from("http://stream.example/api");
        });
        assert!(matches!(
            StationConfig::parse(&raw),
            Err(StationConfigError::Invalid(_))
        ));
    }

    #[test]
    fn parse_rejects_out_of_range_threshold() {
        let raw = manifest_with(|value| {
            value["reveal"]["threshold"] = Value::from(1.5);
        });
        assert!(matches!(
            StationConfig::parse(&raw),
            Err(StationConfigError::Invalid(_))
        ));
    }

    #[test]
    fn parse_reports_shape_errors() {
        assert!(matches!(
            StationConfig::parse("{\"schema_version\": 1}"),
            Err(StationConfigError::Parse(_))
        ));
    }
}
