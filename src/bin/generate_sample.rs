//! Writes a synthetic `vehicles_us.csv` in the same layout as the real
//! listings export, for trying the dashboard without the original data.

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// (model, body type, price when new)
const MODELS: [(&str, &str, f64); 10] = [
    ("ford f-150", "truck", 42000.0),
    ("chevrolet silverado 1500", "pickup", 40000.0),
    ("toyota camry", "sedan", 26000.0),
    ("honda accord", "sedan", 25000.0),
    ("jeep wrangler", "SUV", 33000.0),
    ("subaru outback", "wagon", 29000.0),
    ("nissan altima", "sedan", 24000.0),
    ("ford mustang", "coupe", 31000.0),
    ("honda odyssey", "mini-van", 34000.0),
    ("bmw x5", "SUV", 60000.0),
];

/// (condition, price multiplier)
const CONDITIONS: [(&str, f64); 6] = [
    ("new", 1.15),
    ("like new", 1.05),
    ("excellent", 1.0),
    ("good", 0.85),
    ("fair", 0.6),
    ("salvage", 0.3),
];

const FUELS: [&str; 3] = ["gas", "gas", "diesel"];
const ROWS: usize = 5000;
const NEWEST_YEAR: i32 = 2019;

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "vehicles_us.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    writer.write_record([
        "price",
        "model_year",
        "model",
        "condition",
        "cylinders",
        "fuel",
        "odometer",
        "type",
        "days_listed",
    ])?;

    for _ in 0..ROWS {
        let &(model, body_type, new_price) = rng.pick(&MODELS);
        let &(condition, multiplier) = rng.pick(&CONDITIONS);
        let age = (rng.next_f64() * 25.0) as i32;
        let model_year = NEWEST_YEAR - age;

        let odometer = (f64::from(age) * rng.gauss(12000.0, 3000.0)).max(0.0).round();
        let depreciation = 0.88f64.powi(age);
        let price = (new_price * depreciation * multiplier * rng.gauss(1.0, 0.12))
            .max(1.0)
            .round();
        let days_listed = (rng.gauss(40.0, 25.0).abs()).round() as u32;
        let cylinders = if body_type == "sedan" { "4.0" } else { "6.0" };

        // Blanks where the real export has gaps.
        let model_year = if rng.chance(0.07) {
            String::new()
        } else {
            format!("{model_year}.0")
        };
        let odometer = if rng.chance(0.15) {
            String::new()
        } else {
            format!("{odometer:.1}")
        };
        let body_type = if rng.chance(0.02) { "" } else { body_type };

        writer.write_record([
            format!("{price:.0}"),
            model_year,
            model.to_string(),
            condition.to_string(),
            cylinders.to_string(),
            rng.pick(&FUELS).to_string(),
            odometer,
            body_type.to_string(),
            days_listed.to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {ROWS} listings to {output_path}");
    Ok(())
}
