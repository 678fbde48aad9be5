//! Writes a small set of synthetic experiment directories with
//! VIES/RMSE/ACOR verification tables, for demos and manual runs:
//!
//! ```text
//! cargo run --bin generate_tables
//! cargo run -- 2013010100 2013013118 VTMP-500 CTRL CTRL EnKF EnSRF NCEP
//! ```

use std::fs;
use std::io::Write;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const START: &str = "2013010100";
const END: &str = "2013013118";
const N_LEAD_TIMES: usize = 21;
const N_QUANTITIES: usize = 23;

/// (experiment, rmse offset, acor offset) – CTRL is the reference, the
/// others sit progressively farther from it.
const EXPERIMENTS: &[(&str, f64, f64)] = &[
    ("CTRL", 0.0, 0.0),
    ("EnKF", 0.03, -0.004),
    ("EnSRF", 0.08, -0.010),
    ("NCEP", 0.15, -0.020),
];

fn main() {
    let mut rng = SimpleRng::new(42);

    for &(exp, rmse_offset, acor_offset) in EXPERIMENTS {
        fs::create_dir_all(exp).expect("Failed to create experiment directory");

        let mut vies_rows = Vec::with_capacity(N_QUANTITIES);
        let mut rmse_rows = Vec::with_capacity(N_QUANTITIES);
        let mut acor_rows = Vec::with_capacity(N_QUANTITIES);

        // Quantity row 0 is the lead-time axis itself.
        let hours: Vec<f64> = (0..N_LEAD_TIMES).map(|t| (t * 6) as f64).collect();
        vies_rows.push(hours.clone());
        rmse_rows.push(hours.clone());
        acor_rows.push(hours);

        for q in 1..N_QUANTITIES {
            let scale = 0.5 + q as f64 * 0.25;
            let mut vies = Vec::with_capacity(N_LEAD_TIMES);
            let mut rmse = Vec::with_capacity(N_LEAD_TIMES);
            let mut acor = Vec::with_capacity(N_LEAD_TIMES);

            for t in 0..N_LEAD_TIMES {
                let growth = (t as f64 / N_LEAD_TIMES as f64).sqrt();
                rmse.push(scale * (0.4 + growth) + rmse_offset + rng.gauss(0.0, 0.01));
                acor.push((0.99 - 0.25 * growth + acor_offset + rng.gauss(0.0, 0.002)).min(1.0));
                vies.push(rng.gauss(rmse_offset * 0.5, 0.05 * scale));
            }
            vies_rows.push(vies);
            rmse_rows.push(rmse);
            acor_rows.push(acor);
        }

        write_table(exp, "VIES", &vies_rows);
        write_table(exp, "RMSE", &rmse_rows);
        write_table(exp, "ACOR", &acor_rows);
    }

    println!(
        "Wrote {} experiments x 3 tables ({} quantities, {} lead times)",
        EXPERIMENTS.len(),
        N_QUANTITIES,
        N_LEAD_TIMES
    );
}

fn write_table(exp: &str, kind: &str, rows: &[Vec<f64>]) {
    let path = format!("./{exp}/{kind}EXP01_{START}{END}T.scam");
    let mut file = fs::File::create(&path).expect("Failed to create table file");

    writeln!(file, "% {kind} one row per quantity, one column per lead time")
        .expect("Failed to write table header");
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| format!("{v:.6}")).collect();
        writeln!(file, "{}", line.join(" ")).expect("Failed to write table row");
    }
}
