//! Input schema declarations.
//!
//! The host renders one widget per declared input and expects the schema in
//! the shape `{"required": {"name": ["TYPE", {options}]}}`.

use super::{CATEGORY, NodeKind};
use crate::config::{AutoRefresh, Config};
use crate::sampling::SamplingMode;
use serde_json::{Map, Value, json};

/// Largest latent width or height, in pixels.
pub const MAX_RESOLUTION: u32 = 16384;

/// Widget type and options of a single input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputType {
    Text {
        multiline: bool,
    },
    Int {
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
        step: Option<u64>,
        tooltip: Option<&'static str>,
    },
    Choice {
        options: Vec<&'static str>,
        default: &'static str,
    },
    Boolean {
        default: bool,
    },
    /// Handle to the host's text encoder model.
    Clip {
        tooltip: &'static str,
    },
}

/// One named input of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub name: &'static str,
    pub ty: InputType,
}

impl InputSpec {
    fn new(name: &'static str, ty: InputType) -> Self {
        Self { name, ty }
    }

    /// `["TYPE", {options}]` or `[[choices], {options}]`.
    pub fn to_json(&self) -> Value {
        match &self.ty {
            InputType::Text { multiline } => {
                json!(["STRING", {"multiline": multiline, "dynamicPrompts": false}])
            }
            InputType::Int {
                default,
                min,
                max,
                step,
                tooltip,
            } => {
                let mut options = Map::new();
                options.insert("default".to_string(), json!(default));
                if let Some(min) = min {
                    options.insert("min".to_string(), json!(min));
                }
                if let Some(max) = max {
                    options.insert("max".to_string(), json!(max));
                }
                if let Some(step) = step {
                    options.insert("step".to_string(), json!(step));
                }
                if min.is_none() && max.is_none() {
                    options.insert("display".to_string(), json!("number"));
                }
                if let Some(tooltip) = tooltip {
                    options.insert("tooltip".to_string(), json!(tooltip));
                }
                json!(["INT", options])
            }
            InputType::Choice { options, default } => json!([options, {"default": default}]),
            InputType::Boolean { default } => json!(["BOOLEAN", {"default": default}]),
            InputType::Clip { tooltip } => json!(["CLIP", {"tooltip": tooltip}]),
        }
    }
}

/// Everything the host needs to register a node class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSchema {
    pub kind: NodeKind,
    pub inputs: Vec<InputSpec>,
    pub return_types: &'static [&'static str],
    pub function: &'static str,
}

fn mode_choice(default: SamplingMode) -> InputType {
    InputType::Choice {
        options: SamplingMode::ALL.iter().map(SamplingMode::as_str).collect(),
        default: default.as_str(),
    }
}

fn autorefresh_choice(default: AutoRefresh) -> InputType {
    InputType::Choice {
        options: vec![AutoRefresh::Yes.as_str(), AutoRefresh::No.as_str()],
        default: default.as_str(),
    }
}

fn dimension(tooltip: &'static str) -> InputType {
    InputType::Int {
        default: 512,
        min: Some(16),
        max: Some(u64::from(MAX_RESOLUTION)),
        step: Some(8),
        tooltip: Some(tooltip),
    }
}

impl NodeSchema {
    /// Schema of `kind`, with defaults taken from `config`.
    pub fn for_kind(kind: NodeKind, config: &Config) -> Self {
        let text = InputSpec::new("text", InputType::Text { multiline: true });
        let seed = InputSpec::new(
            "seed",
            InputType::Int {
                default: 0,
                min: None,
                max: None,
                step: None,
                tooltip: None,
            },
        );

        if kind.is_batch() {
            return Self {
                kind,
                inputs: vec![
                    text,
                    seed,
                    InputSpec::new("autorefresh", autorefresh_choice(AutoRefresh::No)),
                    InputSpec::new(
                        "width",
                        dimension("The width of the latent images in pixels."),
                    ),
                    InputSpec::new(
                        "height",
                        dimension("The height of the latent images in pixels."),
                    ),
                    InputSpec::new(
                        "clip",
                        InputType::Clip {
                            tooltip: "The CLIP model used for encoding the text.",
                        },
                    ),
                    InputSpec::new(
                        "batch_size",
                        InputType::Int {
                            default: 1,
                            min: Some(1),
                            max: Some(u64::from(config.max_batch_size)),
                            step: None,
                            tooltip: Some("The number of latent images in the batch."),
                        },
                    ),
                ],
                return_types: &["STRING", "CONDITIONING", "LATENT"],
                function: "get_batch_prompts",
            };
        }

        let mut inputs = vec![
            text,
            seed,
            InputSpec::new("mode", mode_choice(kind.default_mode())),
        ];
        if kind.is_advanced() {
            inputs.push(InputSpec::new(
                "autorefresh",
                autorefresh_choice(config.default_autorefresh),
            ));
            inputs.push(InputSpec::new(
                "console_output",
                InputType::Boolean {
                    default: config.console_output,
                },
            ));
        }

        Self {
            kind,
            inputs,
            return_types: &["STRING"],
            function: "get_prompt",
        }
    }

    pub fn input(&self, name: &str) -> Option<&InputSpec> {
        self.inputs.iter().find(|input| input.name == name)
    }

    /// Full registration record for the host.
    pub fn to_json(&self) -> Value {
        let required: Map<String, Value> = self
            .inputs
            .iter()
            .map(|input| (input.name.to_string(), input.to_json()))
            .collect();

        json!({
            "class": self.kind.class_name(),
            "display_name": self.kind.display_name(),
            "category": CATEGORY,
            "input": {"required": required},
            "output": self.return_types,
            "function": self.function,
        })
    }
}
