use serde_json::{json, Value};

use crate::modules::portfolio::application::domain::PortfolioPayload;

fn section<T: serde::de::DeserializeOwned>(rows: Value) -> Option<Vec<T>> {
    Some(serde_json::from_value(rows).unwrap())
}

/// A fully populated portfolio: titanium theme, a cropped profile photo and
/// one entry in every section.
pub fn sample_payload() -> PortfolioPayload {
    PortfolioPayload {
        config: Some(
            serde_json::from_value(json!({
                "heroName": "Ada Lovelace",
                "heroSubtitle": "First programmer",
                "aboutText": "<p>Poetical science.</p>",
                "theme": "titanium",
                "heroPhotoStyle": "frame-circle",
                "profileImage": "https://cdn.test/profile/ada.png",
                "profileCrop": {"x": 0, "y": 0, "width": 400, "height": 400},
                "socials": {
                    "github": "https://github.com/ada",
                    "email": "ada@example.com"
                }
            }))
            .unwrap(),
        ),
        experience: section(json!([
            {"id": 1, "role": "Analyst", "company": "Babbage & Co", "date": "1842 - 1843", "order": 1}
        ])),
        projects: section(json!([
            {
                "id": 2,
                "title": "Analytical Engine",
                "description": "Notes on the engine.",
                "status": "Published",
                "techstack": ["Punch cards", "Bernoulli numbers"],
                "imageurl": "https://cdn.test/projects/engine.png"
            }
        ])),
        skills: section(json!([{"id": 3, "name": "Mathematics"}])),
        achievements: section(json!([
            {"id": 4, "title": "Note G", "category": "Publication", "date": "1843"}
        ])),
        education: section(json!([
            {"id": 5, "school": "Home tutoring", "major": "Mathematics", "start_year": 2020, "end_year": ""}
        ])),
    }
}
