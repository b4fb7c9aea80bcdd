// src/bin/seed.rs
// Demo data seeder: provisions towns, attractions, and images through the
// public API with the staff token, then exercises an image reorder.
use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde_json::{json, Value};
use std::env;

// --- ANSI terminal colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const STAFF_TOKEN_HEADER: &str = "X-Staff-Token";

struct TownSeed {
    name: &'static str,
    description: &'static str,
    attractions: &'static [(&'static str, &'static str)],
    image_urls: &'static [&'static str],
}

const TOWNS: &[TownSeed] = &[
    TownSeed {
        name: "Ronda",
        description: "Clifftop town split by the El Tajo gorge",
        attractions: &[
            ("Puente Nuevo", "18th-century bridge spanning the gorge"),
            ("Plaza de Toros", "One of the oldest bullrings in Spain"),
        ],
        image_urls: &[
            "https://images.example.com/ronda/gorge.jpg",
            "https://images.example.com/ronda/bridge.jpg",
            "https://images.example.com/ronda/old-town.jpg",
            "https://images.example.com/ronda/viewpoint.jpg",
        ],
    },
    TownSeed {
        name: "Frigiliana",
        description: "Whitewashed hillside village in the Axarquia",
        attractions: &[("Barribarto", "Moorish old quarter of cobbled lanes")],
        image_urls: &[
            "https://images.example.com/frigiliana/streets.jpg",
            "https://images.example.com/frigiliana/rooftops.jpg",
        ],
    },
    TownSeed {
        name: "Setenil de las Bodegas",
        description: "Houses built into the overhanging rock of the Trejo gorge",
        attractions: &[("Cuevas del Sol", "Cave street beneath the rock overhang")],
        image_urls: &["https://images.example.com/setenil/cuevas.jpg"],
    },
];

struct Seeder {
    client: Client,
    base_url: String,
    staff_token: String,
}

impl Seeder {
    fn new(base_url: String, staff_token: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            staff_token,
        }
    }

    async fn check_health(&self) -> Result<()> {
        let resp = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .context("API is not reachable - is the server running?")?;

        if !resp.status().is_success() {
            bail!("Health check failed with status {}", resp.status());
        }
        Ok(())
    }

    /// POST a JSON body with the staff token and return the created resource
    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        let resp = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header(STAFF_TOKEN_HEADER, &self.staff_token)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", path))?;

        let status = resp.status();
        let payload: Value = resp.json().await.unwrap_or_default();
        if !status.is_success() {
            bail!("POST {} returned {}: {}", path, status, payload);
        }
        Ok(payload)
    }

    async fn create_town(&self, seed: &TownSeed) -> Result<String> {
        let town = self
            .post(
                "/towns",
                json!({ "name": seed.name, "description": seed.description }),
            )
            .await?;
        id_of(&town).context("Town response carried no id")
    }

    async fn create_attraction(
        &self,
        town_id: &str,
        name: &str,
        description: &str,
    ) -> Result<String> {
        let attraction = self
            .post(
                &format!("/towns/{}/attractions", town_id),
                json!({ "name": name, "description": description }),
            )
            .await?;
        id_of(&attraction).context("Attraction response carried no id")
    }

    async fn add_town_image(&self, town_id: &str, image_url: &str) -> Result<String> {
        let image = self
            .post(
                &format!("/towns/{}/images", town_id),
                json!({ "image_url": image_url }),
            )
            .await?;
        id_of(&image).context("Image response carried no id")
    }

    async fn add_attraction_image(&self, attraction_id: &str, image_url: &str) -> Result<()> {
        self.post(
            &format!("/attractions/{}/images", attraction_id),
            json!({ "image_url": image_url }),
        )
        .await?;
        Ok(())
    }

    async fn reorder_town_image(&self, image_id: &str, order: i32) -> Result<()> {
        self.post(
            "/towns/images/order",
            json!({ "id": image_id, "order": order }),
        )
        .await?;
        Ok(())
    }
}

fn id_of(resource: &Value) -> Option<String> {
    resource.get("id").and_then(Value::as_str).map(String::from)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let staff_token = env::var("STAFF_TOKEN").context("STAFF_TOKEN must be set in .env")?;
    let base_url =
        env::var("TOWNS_API_URL").unwrap_or_else(|_| "http://localhost:8003".to_string());

    let seeder = Seeder::new(base_url.clone(), staff_token);

    println!("{}{}Seeding demo data into {}{}", BOLD, CYAN, base_url, RESET);
    seeder.check_health().await?;

    let mut towns_created = 0;
    let mut attractions_created = 0;
    let mut images_created = 0;
    let mut last_image_ids: Vec<String> = Vec::new();

    for seed in TOWNS {
        let town_id = seeder.create_town(seed).await?;
        towns_created += 1;
        println!("  {}+{} town {} ({})", GREEN, RESET, seed.name, town_id);

        for (name, description) in seed.attractions {
            let attraction_id = seeder.create_attraction(&town_id, name, description).await?;
            attractions_created += 1;
            seeder
                .add_attraction_image(
                    &attraction_id,
                    &format!("https://images.example.com/attractions/{}.jpg", attraction_id),
                )
                .await?;
            images_created += 1;
            println!("    {}+{} attraction {}", GREEN, RESET, name);
        }

        last_image_ids.clear();
        for url in seed.image_urls {
            let image_id = seeder.add_town_image(&town_id, url).await?;
            last_image_ids.push(image_id);
            images_created += 1;
        }
    }

    // Exercise the reorder endpoint: promote the last appended image of the
    // final town to the front, then push it past the end (bottom move).
    if let Some(image_id) = last_image_ids.last() {
        seeder.reorder_town_image(image_id, 0).await?;
        seeder.reorder_town_image(image_id, 100).await?;
        println!(
            "  {}~{} reordered image {} (front, then bottom)",
            YELLOW, RESET, image_id
        );
    }

    println!("\n{}Seeding complete{}", GREEN, RESET);
    println!("{}Totals:{}", BOLD, RESET);
    println!("  - towns:       {}", towns_created);
    println!("  - attractions: {}", attractions_created);
    println!("  - images:      {}", images_created);

    Ok(())
}
