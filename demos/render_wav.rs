//! Renders the module's mix output with a pulse width and mix sweep to a
//! WAV file.

use hound::{SampleFormat, WavSpec, WavWriter};
use simple_logger::SimpleLogger;

use rect_vco_dsp::module::{AudioProcessor, RectVco, OUTPUT_LEVEL};
use rect_vco_dsp::ProcessArgs;

const SAMPLE_RATE: f32 = 48000.0;
const DURATION: f32 = 4.0;

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let args = ProcessArgs::new(SAMPLE_RATE);
    let mut vco = RectVco::new();
    vco.reset();
    vco.inputs.pitch = -1.0;

    let samples = (DURATION * SAMPLE_RATE) as usize;
    log::info!("rendering {samples} samples");

    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create("rect_vco.wav", spec).unwrap();

    for n in 0..samples {
        let t = n as f32 / samples as f32;
        vco.params.pulse_width = 0.05 + 0.9 * t;
        vco.params.mix = t;

        let frame = vco.process(&args);
        writer.write_sample(frame.mix / OUTPUT_LEVEL).unwrap();
    }

    writer.finalize().unwrap();
    log::info!("wrote rect_vco.wav");
}
