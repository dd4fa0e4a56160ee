//! Static description of the module's panel controls and jacks.
//!
//! The host consumes this once at plugin init to build its UI and
//! persistence layers; nothing here is touched on the audio thread.

/// Display unit of a panel control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Volts,
    Percent,
    Semitones,
}

/// Description of a panel parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamInfo {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub unit: Unit,
}

/// Description of an input jack.
#[derive(Debug, Clone, Copy)]
pub struct InputInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Description of an output jack.
#[derive(Debug, Clone, Copy)]
pub struct OutputInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Static description of a module: identity plus its parameter and port
/// tables.
#[derive(Debug, Clone, Copy)]
pub struct ModuleDescriptor {
    /// Stable identifier used by the host for persistence.
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamInfo],
    pub inputs: &'static [InputInfo],
    pub outputs: &'static [OutputInfo],
}

/// Descriptor of the RectVCO module.
pub const RECT_VCO: ModuleDescriptor = ModuleDescriptor {
    slug: "RectVCO",
    name: "Rect VCO",
    description: "Rectangle/sawtooth oscillator with pulse width, interval and mix",
    params: &[
        ParamInfo {
            name: "Pulse width",
            min: 0.01,
            max: 0.99,
            default: 0.5,
            unit: Unit::Percent,
        },
        ParamInfo {
            name: "Pulse width CV amount",
            min: -0.5,
            max: 0.5,
            default: 0.0,
            unit: Unit::Percent,
        },
        ParamInfo {
            name: "Mix",
            min: 0.0,
            max: 1.0,
            default: 0.5,
            unit: Unit::Percent,
        },
        ParamInfo {
            name: "Mix CV amount",
            min: -0.5,
            max: 0.5,
            default: 0.0,
            unit: Unit::Percent,
        },
        ParamInfo {
            name: "Interval",
            min: -12.0,
            max: 12.0,
            default: 0.0,
            unit: Unit::Semitones,
        },
    ],
    inputs: &[
        InputInfo {
            name: "Pitch",
            description: "1V/octave pitch input",
        },
        InputInfo {
            name: "Pulse width CV",
            description: "Pulse width modulation input",
        },
        InputInfo {
            name: "Mix CV",
            description: "Mix modulation input",
        },
    ],
    outputs: &[
        OutputInfo {
            name: "Rectangle",
            description: "Rectangle wave output",
        },
        OutputInfo {
            name: "Sawtooth",
            description: "Sawtooth wave output",
        },
        OutputInfo {
            name: "Mix",
            description: "Rectangle/sawtooth blend output",
        },
    ],
};

/// Collects module descriptors during plugin init.
pub trait Registry {
    fn add(&mut self, descriptor: &'static ModuleDescriptor);
}

/// Entry point the host calls once when the plugin is loaded.
pub fn register(registry: &mut dyn Registry) {
    registry.add(&RECT_VCO);
}
