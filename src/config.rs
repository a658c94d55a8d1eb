use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_photo_preview_enabled")]
    pub photo_preview_enabled: bool,
    #[serde(default = "default_photo_protocol")]
    pub photo_protocol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            photo_preview_enabled: default_photo_preview_enabled(),
            photo_protocol: default_photo_protocol(),
        }
    }
}

fn default_photo_preview_enabled() -> bool {
    true
}

fn default_photo_protocol() -> String {
    "auto".to_string()
}
