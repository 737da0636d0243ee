//! svgmotion scene file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use svgmotion_animation::{Easing, TweenSpec};

/// Default scene file name
pub const SCENE_FILE: &str = "svgmotion.toml";

/// Top-level scene configuration (svgmotion.toml)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub scene: CanvasConfig,
    #[serde(default = "default_texts")]
    pub texts: Vec<TextConfig>,
    #[serde(default = "default_rects")]
    pub rects: Vec<RectConfig>,
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Root `<svg>` dimensions
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    600
}

fn default_height() -> u32 {
    400
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// A multi-line `<text>` element
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextConfig {
    #[serde(default = "default_text_x")]
    pub x: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    pub lines: Vec<LineConfig>,
}

fn default_text_x() -> f64 {
    20.0
}

fn default_font_size() -> f64 {
    26.0
}

/// One `<tspan>` line
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LineConfig {
    pub text: String,
    pub y: f64,
}

/// A `<rect>` whose width is tweened
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RectConfig {
    pub y: f64,
    #[serde(default = "default_rect_height")]
    pub height: f64,
    /// Easing curve name, e.g. `easeOutQuart`; falls back to `timing.rect_width`
    #[serde(default)]
    pub easing: Option<String>,
}

fn default_rect_height() -> f64 {
    20.0
}

impl RectConfig {
    pub fn easing(&self, fallback: &TweenConfig) -> Result<Easing> {
        match &self.easing {
            Some(name) => name
                .parse::<Easing>()
                .with_context(|| format!("Invalid easing for rect at y = {}", self.y)),
            None => fallback.easing(),
        }
    }
}

/// Parameters for one attribute tween in the demo sequence
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TweenConfig {
    pub from: f64,
    pub to: f64,
    pub step: f64,
    pub tick_ms: u64,
    pub easing: String,
}

impl TweenConfig {
    pub fn easing(&self) -> Result<Easing> {
        self.easing
            .parse::<Easing>()
            .with_context(|| format!("Invalid easing `{}`", self.easing))
    }

    /// Validated tween parameters for `attribute`
    pub fn spec(&self, attribute: &str) -> Result<TweenSpec> {
        let spec = TweenSpec::new(attribute, self.from, self.to)
            .with_step(self.step)
            .with_tick_ms(self.tick_ms)
            .with_easing(self.easing()?);
        spec.validate()?;
        Ok(spec)
    }
}

/// Demo sequence timing
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TimingConfig {
    /// Offset that pushes hidden characters out of view
    #[serde(default = "default_far_offset")]
    pub far_offset: f64,
    /// Tick for the first reveal
    #[serde(default = "default_fast_tick")]
    pub lettering_tick_ms: u64,
    /// Tick for the reveal after the restart
    #[serde(default = "default_slow_tick")]
    pub restart_tick_ms: u64,
    #[serde(default = "default_font_tween")]
    pub font_size: TweenConfig,
    #[serde(default = "default_spacing_tween")]
    pub line_spacing: TweenConfig,
    #[serde(default = "default_width_tween")]
    pub rect_width: TweenConfig,
    /// How many times the rect pass runs
    #[serde(default = "default_rect_cycles")]
    pub rect_cycles: u32,
}

fn default_far_offset() -> f64 {
    1000.0
}

fn default_fast_tick() -> u64 {
    10
}

fn default_slow_tick() -> u64 {
    50
}

fn default_font_tween() -> TweenConfig {
    TweenConfig {
        from: 26.0,
        to: 10.0,
        step: 0.3,
        tick_ms: 30,
        easing: "easeInOutQuart".to_string(),
    }
}

fn default_spacing_tween() -> TweenConfig {
    TweenConfig {
        from: 52.0,
        to: 20.0,
        step: 0.5,
        tick_ms: 25,
        easing: "easeInOutQuart".to_string(),
    }
}

fn default_width_tween() -> TweenConfig {
    TweenConfig {
        from: 10.0,
        to: 200.0,
        step: 2.0,
        tick_ms: 20,
        easing: "linear".to_string(),
    }
}

fn default_rect_cycles() -> u32 {
    2
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            far_offset: default_far_offset(),
            lettering_tick_ms: default_fast_tick(),
            restart_tick_ms: default_slow_tick(),
            font_size: default_font_tween(),
            line_spacing: default_spacing_tween(),
            rect_width: default_width_tween(),
            rect_cycles: default_rect_cycles(),
        }
    }
}

fn default_texts() -> Vec<TextConfig> {
    vec![TextConfig {
        x: default_text_x(),
        font_size: default_font_size(),
        lines: vec![
            LineConfig {
                text: "Letter by letter,".to_string(),
                y: 26.0,
            },
            LineConfig {
                text: "line by line.".to_string(),
                y: 52.0,
            },
        ],
    }]
}

fn default_rects() -> Vec<RectConfig> {
    ["easeOutQuart", "easeOutCubic", "easeInElastic"]
        .iter()
        .enumerate()
        .map(|(i, easing)| RectConfig {
            y: 120.0 + 30.0 * i as f64,
            height: default_rect_height(),
            easing: Some(easing.to_string()),
        })
        .collect()
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scene: CanvasConfig::default(),
            texts: default_texts(),
            rects: default_rects(),
            timing: TimingConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Load a scene from a file or a directory containing svgmotion.toml
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(SCENE_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No scene file found at {}. Run `svgmotion init` to create one.",
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Load the scene at `path`, else `dir/svgmotion.toml` when it exists,
    /// else the built-in scene
    pub fn load_or_default(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default_path = dir.join(SCENE_FILE);
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the built-in scene to `dir/svgmotion.toml`, refusing to overwrite
    pub fn write_default(dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

        let target = dir.join(SCENE_FILE);
        if target.exists() {
            anyhow::bail!("{} already exists", target.display());
        }

        fs::write(&target, Self::default().to_toml()?)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        Ok(target)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: SceneConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize scene")
    }

    /// Check every easing name and tween parameter up front so the demo
    /// never fails halfway
    pub fn validate(&self) -> Result<()> {
        for rect in &self.rects {
            rect.easing(&self.timing.rect_width)?;
        }
        let tweens = [
            ("timing.font_size", &self.timing.font_size),
            ("timing.line_spacing", &self.timing.line_spacing),
            ("timing.rect_width", &self.timing.rect_width),
        ];
        for (section, tween) in tweens {
            tween
                .spec(section)
                .with_context(|| format!("Invalid [{section}]"))?;
        }
        Ok(())
    }
}
