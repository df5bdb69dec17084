use folded_sine::osc::{sine::Sine, triangle::Triangle, Oscillator};

fn plot(label: &str, osc: &mut dyn Oscillator, count: usize) {
    println!("--- {label} ---");
    for _ in 0..count {
        let sample = osc.tick();

        // construct a waveform
        let width = 80;
        let zero = width / 2;
        let amp = (sample * zero as f32) as i32;
        let mut wave = String::new();
        for i in 0..width {
            if i == zero {
                wave.push('|');
            } else if i == zero + amp {
                wave.push('+');
            } else {
                wave.push(' ');
            }
        }
        println!("{}", wave);
    }
}

fn main() {
    let sample_rate = 4000.0;
    let count = 120;

    let mut sine = Sine::new(sample_rate).expect("valid sample rate");
    sine.set_frequency(55.0);
    sine.set_phase(0.0);
    plot("sine", &mut sine, count);

    let mut triangle = Triangle::new(sample_rate).expect("valid sample rate");
    triangle.set_frequency(55.0);
    triangle.set_phase(0.0);
    plot("triangle", &mut triangle, count);
}
