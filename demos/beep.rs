use anyhow::{anyhow, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use folded_sine::osc::{sine::Sine, Oscillator};

const SECONDS: f32 = 3.0;

fn main() -> Result<()> {
    let host = cpal::default_host();
    let out_dev = host
        .default_output_device()
        .ok_or_else(|| anyhow!("no output device available"))?;
    let config = out_dev
        .supported_output_configs()
        .context("no supported output configs")?
        .find(|c| c.sample_format() == cpal::SampleFormat::F32)
        .ok_or_else(|| anyhow!("no f32 output configuration"))?
        .with_max_sample_rate();

    let sample_rate = config.sample_rate().0 as f32;
    let channel_count = config.channels() as usize;
    println!("Sample rate: {}", sample_rate);
    println!("Channels: {}", channel_count);

    let mut osc = Sine::new(sample_rate)?;
    osc.set_frequency(220.0);

    let stream = out_dev
        .build_output_stream(
            &config.config(),
            {
                // Glide one octave up over the length of the beep.
                let mut freq = 220.0;
                let step = 220.0 / (SECONDS * sample_rate);
                move |d: &mut [f32], _info| {
                    for frame in d.chunks_mut(channel_count) {
                        osc.set_frequency(freq);
                        freq += step;

                        let sample = 0.3 * osc.tick();
                        frame.fill(sample);
                    }
                }
            },
            |e| panic!("{}", e),
            None,
        )
        .context("failed to build output stream")?;

    stream.play()?;
    std::thread::sleep(std::time::Duration::from_secs_f32(SECONDS));

    Ok(())
}
