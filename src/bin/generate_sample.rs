//! Generates a deterministic `pizza_sales.csv` so the dashboard can be tried
//! without the real dataset. Run with `cargo run --bin generate_sample`.

use anyhow::{Context, Result};

const OUTPUT_PATH: &str = "pizza_sales.csv";
const N_ORDERS: usize = 500;

/// Minimal deterministic PRNG (xoshiro256**).
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        // splitmix64 expansion of the seed into the full state.
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = x;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            *slot = z ^ (z >> 31);
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = self.state[1]
            .wrapping_mul(5)
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

    /// Uniform in `0..n`.
    fn gen_range(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

struct Pizza {
    id_stem: &'static str,
    name: &'static str,
    category: &'static str,
    ingredients: &'static str,
    /// Base price of the medium size.
    base_price: f64,
}

const MENU: &[Pizza] = &[
    Pizza {
        id_stem: "hawaiian",
        name: "The Hawaiian Pizza",
        category: "Classic",
        ingredients: "Sliced Ham, Pineapple, Mozzarella Cheese",
        base_price: 13.25,
    },
    Pizza {
        id_stem: "pepperoni",
        name: "The Pepperoni Pizza",
        category: "Classic",
        ingredients: "Mozzarella Cheese, Pepperoni",
        base_price: 12.5,
    },
    Pizza {
        id_stem: "greek",
        name: "The Greek Pizza",
        category: "Classic",
        ingredients: "Kalamata Olives, Feta Cheese, Tomatoes, Garlic, Oregano",
        base_price: 12.0,
    },
    Pizza {
        id_stem: "five_cheese",
        name: "The Five Cheese Pizza",
        category: "Veggie",
        ingredients: "Mozzarella Cheese, Provolone Cheese, Gouda Cheese, Romano Cheese, Blue Cheese",
        base_price: 18.5,
    },
    Pizza {
        id_stem: "mexicana",
        name: "The Mexicana Pizza",
        category: "Veggie",
        ingredients: "Tomatoes, Red Peppers, Jalapeno Peppers, Red Onions, Cilantro, Corn",
        base_price: 16.0,
    },
    Pizza {
        id_stem: "spinach_supreme",
        name: "The Spinach Supreme Pizza",
        category: "Veggie",
        ingredients: "Spinach, Red Onions, Pepperoni, Tomatoes, Artichokes, Kalamata Olives",
        base_price: 15.5,
    },
    Pizza {
        id_stem: "thai_ckn",
        name: "The Thai Chicken Pizza",
        category: "Chicken",
        ingredients: "Chicken, Pineapple, Tomatoes, Red Peppers, Thai Sweet Chilli Sauce",
        base_price: 16.75,
    },
    Pizza {
        id_stem: "bbq_ckn",
        name: "The Barbecue Chicken Pizza",
        category: "Chicken",
        ingredients: "Barbecued Chicken, Red Peppers, Green Peppers, Tomatoes, Red Onions",
        base_price: 16.75,
    },
    Pizza {
        id_stem: "cali_ckn",
        name: "The California Chicken Pizza",
        category: "Chicken",
        ingredients: "Chicken, Artichoke, Spinach, Garlic, Jalapeno Peppers, Fontina Cheese",
        base_price: 16.75,
    },
    Pizza {
        id_stem: "brie_carre",
        name: "The Brie Carre Pizza",
        category: "Supreme",
        ingredients: "Brie Carre Cheese, Prosciutto, Caramelized Onions, Pears, Thyme",
        base_price: 23.65,
    },
    Pizza {
        id_stem: "calabrese",
        name: "The Calabrese Pizza",
        category: "Supreme",
        ingredients: "Nduja Salami, Pancetta, Tomatoes, Red Onions, Friggitello Peppers, Garlic",
        base_price: 16.25,
    },
    Pizza {
        id_stem: "sicilian",
        name: "The Sicilian Pizza",
        category: "Supreme",
        ingredients: "Coarse Sicilian Salami, Tomatoes, Green Olives, Luganega Sausage, Onions",
        base_price: 16.25,
    },
];

const SIZES: &[(&str, f64)] = &[("S", 0.8), ("M", 1.0), ("L", 1.25), ("XL", 1.5)];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut writer =
        csv::Writer::from_path(OUTPUT_PATH).with_context(|| format!("creating {OUTPUT_PATH}"))?;

    writer.write_record([
        "order_id",
        "pizza_id",
        "order_date",
        "order_time",
        "item_price",
        "quantity",
        "total_price",
        "pizza_size",
        "pizza_category",
        "pizza_ingredients",
        "pizza_name",
    ])?;

    for order_id in 1..=N_ORDERS {
        let pizza = &MENU[rng.gen_range(MENU.len())];
        let (size, multiplier) = SIZES[rng.gen_range(SIZES.len())];
        // Mostly single pizzas, occasionally up to four.
        let quantity = match rng.gen_range(10) {
            0..=6 => 1,
            7 | 8 => 2,
            _ => 2 + rng.gen_range(3) as i64,
        };

        let item_price = (pizza.base_price * multiplier * 100.0).round() / 100.0;
        let total_price = (item_price * quantity as f64 * 100.0).round() / 100.0;

        let day = 1 + rng.gen_range(28);
        let month = 1 + rng.gen_range(12);
        let hour = 11 + rng.gen_range(12);
        let minute = rng.gen_range(60);
        let second = rng.gen_range(60);

        writer.write_record([
            order_id.to_string(),
            format!("{}_{}", pizza.id_stem, size.to_lowercase()),
            format!("2015-{month:02}-{day:02}"),
            format!("{hour:02}:{minute:02}:{second:02}"),
            format!("{item_price:.2}"),
            quantity.to_string(),
            format!("{total_price:.2}"),
            size.to_string(),
            pizza.category.to_string(),
            pizza.ingredients.to_string(),
            pizza.name.to_string(),
        ])?;
    }

    writer.flush().context("flushing CSV")?;
    println!("wrote {N_ORDERS} rows to {OUTPUT_PATH}");
    Ok(())
}
