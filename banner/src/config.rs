use std::{fs, path::Path};

use anyhow::Context;
use liblife::{config::LifeConfig, grid::Cell};
use serde::{Deserialize, Serialize};

pub type Rgb = [u8; 3];

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BannerConfig {
    pub life: LifeConfig,
    pub palette: Palette,

    /// Delay between two drawn generations.
    pub frame_interval_millis: u64,

    /// Stop after this many generations. Runs forever when unset.
    pub generations: Option<u64>,

    /// Sprinkle new cells in when the grid dies out or stops changing.
    pub reseed_when_stale: bool,
}

impl BannerConfig {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read banner config")?;
        let config = serde_json::from_slice(&config_serialized)
            .context("Couldn't deserialize banner config")?;
        Ok(config)
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            life: LifeConfig::default(),
            palette: Palette::default(),
            frame_interval_millis: 500,
            generations: None,
            reseed_when_stale: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Palette {
    #[serde(with = "hex_rgb")]
    pub alive: Rgb,

    #[serde(with = "hex_rgb")]
    pub dead: Rgb,
}

impl Palette {
    pub fn color(&self, cell: Cell) -> Rgb {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: [0x99, 0x17, 0x3c],
            dead: [0x55, 0x51, 0x52],
        }
    }
}

/// `#rrggbb` strings in config files.
mod hex_rgb {
    use serde::{
        Deserializer, Serializer,
        de::{self, Visitor},
    };

    use super::Rgb;

    pub fn serialize<S>(value: &Rgb, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let [r, g, b] = value;
        serializer.serialize_str(&format!("#{r:02x}{g:02x}{b:02x}"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Rgb, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HexRgbVisitor;

        impl Visitor<'_> for HexRgbVisitor {
            type Value = Rgb;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a colour in #rrggbb form")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let digits = value
                    .strip_prefix('#')
                    .filter(|digits| digits.len() == 6 && digits.is_ascii())
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))?;

                let mut rgb = [0; 3];
                for (channel, index) in rgb.iter_mut().zip((0..6).step_by(2)) {
                    *channel = u8::from_str_radix(&digits[index..index + 2], 16)
                        .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))?;
                }

                Ok(rgb)
            }
        }

        deserializer.deserialize_str(HexRgbVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_the_default_banner() {
        let config: BannerConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, BannerConfig::default());
        assert_eq!(config.life.rows, 9);
        assert_eq!(config.life.cols, 29);
    }

    #[test]
    fn palette_reads_hex_colors() {
        let config: BannerConfig = serde_json::from_str(
            r##"{ "palette": { "alive": "#ADFF2F", "dead": "#dcdcdc" }, "generations": 3 }"##,
        )
        .unwrap();

        assert_eq!(config.palette.alive, [0xad, 0xff, 0x2f]);
        assert_eq!(config.palette.dead, [0xdc, 0xdc, 0xdc]);
        assert_eq!(config.generations, Some(3));
    }

    #[test]
    fn palette_writes_hex_colors() {
        let serialized = serde_json::to_string(&Palette::default()).unwrap();

        assert_eq!(serialized, r##"{"alive":"#99173c","dead":"#555152"}"##);
    }

    #[test]
    fn malformed_colors_are_rejected() {
        for bad in [r#""99173C""#, r##""#99173""##, r##""#zz173C""##] {
            let json = format!(r#"{{ "alive": {bad} }}"#);
            assert!(serde_json::from_str::<Palette>(&json).is_err(), "{bad}");
        }
    }

    #[test]
    fn palette_maps_cells_to_colors() {
        let palette = Palette::default();

        assert_eq!(palette.color(Cell::Alive), palette.alive);
        assert_eq!(palette.color(Cell::Dead), palette.dead);
    }

    #[test]
    fn missing_config_file_has_context() {
        let err = BannerConfig::load("/nonexistent/banner.json").unwrap_err();

        assert_eq!(err.to_string(), "Couldn't read banner config");
    }
}
