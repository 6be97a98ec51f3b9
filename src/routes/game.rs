use crate::{
    catalog::{self, CatalogEntry, Charm, PowerPlay},
    game::{self, FairnessEngine, Scorer, TileBag, WordValidator},
    models::{ModifierState, ScoreResult, Slot, Tile},
    AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Largest draw a single request may ask for
pub const MAX_DRAW: usize = 100;

/// Seeded requests replay exactly; unseeded ones use fresh entropy
fn request_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub charms: Vec<CatalogEntry<Charm>>,
    pub power_plays: Vec<CatalogEntry<PowerPlay>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BagRequest {
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct BagResponse {
    pub bag: TileBag,
}

#[derive(Debug, Deserialize)]
pub struct DrawRequest {
    pub count: usize,
    #[serde(default)]
    pub bag: TileBag,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct DrawResponse {
    pub tiles: Vec<Tile>,
    pub bag: TileBag,
    pub top_ups: usize,
}

#[derive(Debug, Deserialize)]
pub struct DealRequest {
    /// Bag to deal from; a fresh one when absent
    #[serde(default)]
    pub bag: Option<TileBag>,
    #[serde(default)]
    pub tiles_to_return: Vec<Tile>,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct RepairRequest {
    pub hand: Vec<Slot>,
    #[serde(default)]
    pub bag: TileBag,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct HandResponse {
    pub hand: Vec<Slot>,
    pub bag: TileBag,
    pub was_changed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub word: String,
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub modifiers: ModifierState,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Modifier state with this word's power-play charges spent
    pub modifiers: ModifierState,
}

#[derive(Debug, Deserialize)]
pub struct CanFormRequest {
    pub word: String,
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Serialize)]
pub struct CanFormResponse {
    pub can_form: bool,
}

/// List every charm and power-play
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        charms: catalog::charm_entries(),
        power_plays: catalog::power_play_entries(),
    })
}

/// Create a full shuffled bag
pub async fn create_bag(Json(payload): Json<BagRequest>) -> Json<BagResponse> {
    let mut rng = request_rng(payload.seed);
    Json(BagResponse {
        bag: TileBag::full(&mut rng),
    })
}

/// Draw tiles from the front of a bag
pub async fn draw_tiles(Json(payload): Json<DrawRequest>) -> Result<Json<DrawResponse>, StatusCode> {
    if payload.count > MAX_DRAW {
        tracing::warn!("Rejected draw of {} tiles", payload.count);
        return Err(StatusCode::BAD_REQUEST);
    }

    let mut rng = request_rng(payload.seed);
    let draw = payload.bag.draw(payload.count, &mut rng);

    Ok(Json(DrawResponse {
        tiles: draw.tiles,
        bag: draw.bag,
        top_ups: draw.top_ups,
    }))
}

/// Return tiles, deal a fresh hand, and repair it
pub async fn deal_hand(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DealRequest>,
) -> Json<HandResponse> {
    let mut rng = request_rng(payload.seed);
    let rules = state.config.game.fairness_rules();

    let bag = match payload.bag {
        Some(bag) => bag,
        None => TileBag::full(&mut rng),
    };
    let deal = bag.deal_hand(&payload.tiles_to_return, rules.rack_size, &mut rng);
    let hand = deal.tiles.into_iter().map(Some).collect();

    let engine = FairnessEngine::new(rules, &state.dictionary);
    let repair = engine.repair_hand(hand, deal.bag, &mut rng);

    tracing::info!("Dealt hand {}", crate::models::hand_letters(&repair.hand));

    Json(HandResponse {
        hand: repair.hand,
        bag: repair.bag,
        was_changed: repair.was_changed,
    })
}

/// Repair an existing hand against a bag
pub async fn repair_hand(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RepairRequest>,
) -> Json<HandResponse> {
    let mut rng = request_rng(payload.seed);
    let engine = FairnessEngine::new(state.config.game.fairness_rules(), &state.dictionary);
    let repair = engine.repair_hand(payload.hand, payload.bag, &mut rng);

    Json(HandResponse {
        hand: repair.hand,
        bag: repair.bag,
        was_changed: repair.was_changed,
    })
}

/// Validate a submission and score it
pub async fn score_word(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, StatusCode> {
    let validator = WordValidator::new(state.config.game.min_word_length);
    validator
        .validate_submission(&payload.word, &payload.tiles)
        .map_err(|e| {
            tracing::warn!("Rejected submission {:?}: {}", payload.word, e);
            StatusCode::UNPROCESSABLE_ENTITY
        })?;

    let mut rng = request_rng(payload.seed);
    let scorer = Scorer::new(state.config.game.scoring_rules());
    let result = scorer.calculate_score(&payload.word, &payload.tiles, &payload.modifiers, &mut rng);
    let modifiers = payload.modifiers.consume(&result.consumed_power_plays);

    tracing::info!("Word {} scored {}", payload.word, result.total_score);

    Ok(Json(ScoreResponse { result, modifiers }))
}

/// Check whether a word can be built from the given tiles
pub async fn can_form(Json(payload): Json<CanFormRequest>) -> Json<CanFormResponse> {
    Json(CanFormResponse {
        can_form: game::can_form_word(&payload.word, &payload.tiles),
    })
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, dictionary::Dictionary, routes::create_routes, AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = Arc::new(AppState {
            config: Config::default(),
            dictionary: Dictionary::builtin(),
        });
        create_routes().with_state(state)
    }

    async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn tiles(letters: &str) -> Value {
        Value::Array(
            letters
                .chars()
                .map(|c| {
                    json!({
                        "id": "00000000-0000-0000-0000-000000000000",
                        "letter": c,
                        "base_points": crate::utils::letters::get_letter_value(c),
                    })
                })
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_catalog_lists_everything() {
        let request = Request::builder().uri("/api/catalog").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["charms"].as_array().unwrap().len(), 41);
        assert_eq!(body["power_plays"].as_array().unwrap().len(), 30);
        assert_eq!(body["charms"][0]["id"], "sTierScorer");
    }

    #[tokio::test]
    async fn test_seeded_bag_is_reproducible() {
        let (status, first) = post("/api/bag", json!({ "seed": 7 })).await;
        assert_eq!(status, StatusCode::OK);
        let (_, second) = post("/api/bag", json!({ "seed": 7 })).await;

        assert_eq!(first, second);
        assert_eq!(first["bag"].as_array().unwrap().len(), 100);
    }

    #[tokio::test]
    async fn test_draw_tops_up_empty_bag() {
        let (status, body) = post("/api/draw", json!({ "count": 4, "seed": 1 })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tiles"].as_array().unwrap().len(), 4);
        assert_eq!(body["top_ups"], 1);
        assert_eq!(body["bag"].as_array().unwrap().len(), 96);
    }

    #[tokio::test]
    async fn test_oversized_draw_is_rejected() {
        let (status, _) = post("/api/draw", json!({ "count": 5000 })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_deal_returns_full_rack() {
        let (status, body) = post("/api/deal", json!({ "seed": 3 })).await;
        assert_eq!(status, StatusCode::OK);

        let hand = body["hand"].as_array().unwrap();
        assert_eq!(hand.len(), 10);
        assert!(hand.iter().all(|slot| !slot.is_null()));
        assert_eq!(body["bag"].as_array().unwrap().len(), 90);
    }

    #[tokio::test]
    async fn test_repair_fixes_duplicates() {
        let hand = tiles("QQQQAB");
        let (status, body) = post("/api/repair", json!({ "hand": hand, "seed": 5 })).await;
        assert_eq!(status, StatusCode::OK);

        let qs = body["hand"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|slot| slot["letter"] == "Q")
            .count();
        assert!(qs <= 3, "Got {} Qs", qs);
        assert_eq!(body["was_changed"], true);
    }

    #[tokio::test]
    async fn test_score_plain_word() {
        let (status, body) = post("/api/score", json!({ "word": "cat", "tiles": tiles("CAT") })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_score"], 5);
        assert_eq!(body["base_score"], 5);
    }

    #[tokio::test]
    async fn test_score_spends_power_play_charges() {
        let modifiers = json!({ "active_power_plays": { "biglyScore": 1, "sonicSpeed": 2 } });
        let (status, body) = post(
            "/api/score",
            json!({ "word": "CAT", "tiles": tiles("CAT"), "modifiers": modifiers }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_score"], 40, "5 x 4 x 2");
        assert_eq!(body["modifiers"]["active_power_plays"], json!({ "sonicSpeed": 1 }));
    }

    #[tokio::test]
    async fn test_score_rejects_mismatched_tiles() {
        let (status, _) = post("/api/score", json!({ "word": "DOG", "tiles": tiles("CAT") })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = post("/api/score", json!({ "word": "AT", "tiles": tiles("AT") })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_can_form() {
        let (_, body) = post("/api/can-form", json!({ "word": "act", "tiles": tiles("CAT") })).await;
        assert_eq!(body["can_form"], true);

        let (_, body) = post("/api/can-form", json!({ "word": "TACT", "tiles": tiles("CAT") })).await;
        assert_eq!(body["can_form"], false);
    }
}
