//! Estimation MCP Tools
//!
//! Tools for browsing the drink catalog and estimating BAC.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::bac::{self, RiskTier, CAUTION_THRESHOLD};
use crate::models::{
    DrinkCatalog, DrinkContribution, DrinkSelection, DrinkType, EstimationInput, Gender,
};

// ============================================================================
// Request / Response Structs
// ============================================================================

/// Raw estimate request as received from a client
#[derive(Debug, Clone)]
pub struct EstimateRequest {
    pub gender: String,
    pub body_weight: f64,
    pub weight_unit: String,
    pub drinks: Vec<DrinkSelection>,
    pub elapsed_hours: Option<f64>,
    /// RFC 3339 timestamp of the first drink, used when elapsed_hours is absent
    pub drinking_started_at: Option<String>,
}

/// Catalog entry for display
#[derive(Debug, Serialize)]
pub struct DrinkSummary {
    pub id: String,
    pub volume_ml: f64,
    pub abv_percent: f64,
    pub alcohol_grams_per_serving: f64,
}

impl From<&DrinkType> for DrinkSummary {
    fn from(d: &DrinkType) -> Self {
        Self {
            id: d.id.to_string(),
            volume_ml: d.volume_ml,
            abv_percent: d.abv_percent,
            alcohol_grams_per_serving: d.alcohol_grams_per_serving(),
        }
    }
}

/// Response for list_drinks
#[derive(Debug, Serialize)]
pub struct ListDrinksResponse {
    pub drinks: Vec<DrinkSummary>,
    pub total: usize,
}

/// Response for estimate_bac
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub bac_percent: f64,
    pub tier: RiskTier,
    pub tier_display: String,
    pub advisory: String,
    pub total_alcohol_grams: f64,
    pub raw_bac_percent: f64,
    pub elapsed_hours: f64,
    pub body_weight_kg: f64,
    pub gender: Gender,
    pub contributions: Vec<DrinkContribution>,
    pub unresolved_drinks: Vec<String>,
    /// Hours until BAC falls to the caution threshold
    pub hours_until_safe: f64,
    pub hours_until_sober: f64,
    pub as_of: String,
}

/// Response for classify_bac
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub bac_percent: f64,
    pub tier: RiskTier,
    pub tier_display: String,
    pub advisory: String,
    pub hours_until_safe: f64,
    pub hours_until_sober: f64,
}

// ============================================================================
// Tool Functions
// ============================================================================

/// List every drink in the standard catalog
pub fn list_drinks() -> ListDrinksResponse {
    let drinks: Vec<DrinkSummary> = DrinkCatalog::standard()
        .all()
        .iter()
        .map(DrinkSummary::from)
        .collect();
    let total = drinks.len();

    ListDrinksResponse { drinks, total }
}

/// Look up a single drink
pub fn get_drink(id: &str) -> Option<DrinkSummary> {
    DrinkCatalog::standard().lookup(id).map(DrinkSummary::from)
}

/// Estimate BAC as of now
pub fn estimate_bac(request: EstimateRequest) -> Result<EstimateResponse, String> {
    estimate_bac_at(request, Utc::now())
}

/// Estimate BAC as of the given instant
pub fn estimate_bac_at(
    request: EstimateRequest,
    now: DateTime<Utc>,
) -> Result<EstimateResponse, String> {
    let gender = Gender::from_str(&request.gender).ok_or_else(|| {
        format!(
            "Invalid gender: '{}'. Use 'male' or 'female'.",
            request.gender
        )
    })?;

    let body_weight_kg = bac::to_kg(request.body_weight, &request.weight_unit)
        .ok_or_else(|| format!("Invalid weight unit: '{}'. Use kg, g, or lb.", request.weight_unit))?;

    let elapsed_hours = resolve_elapsed_hours(
        request.elapsed_hours,
        request.drinking_started_at.as_deref(),
        now,
    )?;

    let input = EstimationInput::new(gender, body_weight_kg, request.drinks, elapsed_hours);
    let estimation = bac::estimate_detailed(&input, &DrinkCatalog::standard())
        .map_err(|e| e.to_string())?;

    let result = estimation.result;
    let unresolved_drinks = estimation
        .unresolved_drinks()
        .into_iter()
        .map(str::to_string)
        .collect();

    tracing::info!(
        bac_percent = result.bac_percent,
        tier = result.tier.as_str(),
        "estimate_bac"
    );

    Ok(EstimateResponse {
        bac_percent: result.bac_percent,
        tier: result.tier,
        tier_display: result.tier.display_name().to_string(),
        advisory: result.tier.advisory().to_string(),
        total_alcohol_grams: estimation.total_alcohol_grams,
        raw_bac_percent: estimation.raw_bac_percent,
        elapsed_hours,
        body_weight_kg,
        gender,
        contributions: estimation.contributions,
        unresolved_drinks,
        hours_until_safe: bac::hours_until_below(result.bac_percent, CAUTION_THRESHOLD),
        hours_until_sober: bac::hours_until_below(result.bac_percent, 0.0),
        as_of: now.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    })
}

/// Classify an already known BAC value
pub fn classify_bac(bac_percent: f64) -> Result<ClassifyResponse, String> {
    if !bac_percent.is_finite() || bac_percent < 0.0 {
        return Err(format!(
            "BAC must be a finite number of 0 or more (got {})",
            bac_percent
        ));
    }

    let tier = RiskTier::from_bac(bac_percent);

    Ok(ClassifyResponse {
        bac_percent,
        tier,
        tier_display: tier.display_name().to_string(),
        advisory: tier.advisory().to_string(),
        hours_until_safe: bac::hours_until_below(bac_percent, CAUTION_THRESHOLD),
        hours_until_sober: bac::hours_until_below(bac_percent, 0.0),
    })
}

/// Work out elapsed hours from an explicit value or a start timestamp
pub fn resolve_elapsed_hours(
    elapsed_hours: Option<f64>,
    drinking_started_at: Option<&str>,
    now: DateTime<Utc>,
) -> Result<f64, String> {
    if let Some(hours) = elapsed_hours {
        return Ok(hours);
    }

    let Some(started_at) = drinking_started_at else {
        return Ok(0.0);
    };

    let start = DateTime::parse_from_rfc3339(started_at.trim())
        .map_err(|e| format!("Invalid drinking_started_at '{}': {}", started_at, e))?
        .with_timezone(&Utc);

    if start > now {
        return Err(format!(
            "drinking_started_at '{}' is in the future",
            started_at
        ));
    }

    Ok((now - start).num_seconds() as f64 / 3600.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 23, 0, 0).unwrap()
    }

    fn request(gender: &str, weight: f64, unit: &str, drinks: &[(&str, u32)]) -> EstimateRequest {
        EstimateRequest {
            gender: gender.to_string(),
            body_weight: weight,
            weight_unit: unit.to_string(),
            drinks: drinks
                .iter()
                .map(|(id, qty)| DrinkSelection::new(*id, *qty))
                .collect(),
            elapsed_hours: None,
            drinking_started_at: None,
        }
    }

    #[test]
    fn test_list_drinks() {
        let response = list_drinks();
        assert_eq!(response.total, 5);
        assert_eq!(response.drinks[0].id, "Soju");
        // 50ml * 0.169 * 0.789
        assert!((response.drinks[0].alcohol_grams_per_serving - 6.66705).abs() < 1e-6);
    }

    #[test]
    fn test_get_drink() {
        assert_eq!(get_drink("wine").map(|d| d.volume_ml), Some(120.0));
        assert!(get_drink("Sake").is_none());
    }

    #[test]
    fn test_estimate_with_explicit_hours() {
        let mut req = request("male", 70.0, "kg", &[("Beer", 2)]);
        req.elapsed_hours = Some(1.0);

        let response = estimate_bac_at(req, fixed_now()).unwrap();
        assert!((response.bac_percent - 0.0181513).abs() < 1e-6);
        assert_eq!(response.tier, RiskTier::Safe);
        assert_eq!(response.hours_until_safe, 0.0);
        assert!((response.hours_until_sober - response.bac_percent / 0.015).abs() < 1e-9);
        assert_eq!(response.as_of, "2026-03-14T23:00:00Z");
    }

    #[test]
    fn test_estimate_in_pounds() {
        let kg = request("female", 55.0, "kg", &[("Whiskey", 1)]);
        let lb = request("female", 55.0 * 1000.0 / 453.592, "lb", &[("Whiskey", 1)]);

        let a = estimate_bac_at(kg, fixed_now()).unwrap();
        let b = estimate_bac_at(lb, fixed_now()).unwrap();
        assert!((a.bac_percent - b.bac_percent).abs() < 1e-9);
        assert_eq!(b.tier, RiskTier::Caution);
        assert!(b.hours_until_safe > 0.0);
    }

    #[test]
    fn test_estimate_from_start_time() {
        let mut req = request("male", 70.0, "kg", &[("Beer", 2)]);
        req.drinking_started_at = Some("2026-03-14T21:30:00+00:00".to_string());

        let response = estimate_bac_at(req, fixed_now()).unwrap();
        assert!((response.elapsed_hours - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_hours_win_over_start_time() {
        let mut req = request("male", 70.0, "kg", &[("Beer", 2)]);
        req.elapsed_hours = Some(0.5);
        req.drinking_started_at = Some("2026-03-14T18:00:00Z".to_string());

        let response = estimate_bac_at(req, fixed_now()).unwrap();
        assert_eq!(response.elapsed_hours, 0.5);
    }

    #[test]
    fn test_estimate_reports_unresolved_drinks() {
        let req = request("female", 60.0, "kg", &[("Soju", 2), ("Tequila", 1)]);
        let response = estimate_bac_at(req, fixed_now()).unwrap();
        assert_eq!(response.unresolved_drinks, vec!["Tequila".to_string()]);
        assert_eq!(response.contributions.len(), 2);
    }

    #[test]
    fn test_estimate_rejects_bad_input() {
        let err = estimate_bac_at(request("robot", 70.0, "kg", &[("Beer", 1)]), fixed_now())
            .unwrap_err();
        assert!(err.contains("Invalid gender"));

        let err = estimate_bac_at(request("male", 70.0, "stone", &[("Beer", 1)]), fixed_now())
            .unwrap_err();
        assert!(err.contains("Invalid weight unit"));

        let err = estimate_bac_at(request("male", 0.0, "kg", &[("Beer", 1)]), fixed_now())
            .unwrap_err();
        assert!(err.contains("Body weight"));

        let err = estimate_bac_at(request("male", 70.0, "kg", &[]), fixed_now()).unwrap_err();
        assert!(err.contains("At least one drink"));
    }

    #[test]
    fn test_resolve_elapsed_hours() {
        assert_eq!(resolve_elapsed_hours(None, None, fixed_now()), Ok(0.0));
        assert_eq!(resolve_elapsed_hours(Some(2.0), None, fixed_now()), Ok(2.0));

        let hours = resolve_elapsed_hours(None, Some("2026-03-15T06:00:00+09:00"), fixed_now());
        // 06:00 KST is 21:00 UTC the previous day
        assert_eq!(hours, Ok(2.0));

        assert!(resolve_elapsed_hours(None, Some("yesterday"), fixed_now()).is_err());
        assert!(resolve_elapsed_hours(None, Some("2026-03-15T01:00:00Z"), fixed_now()).is_err());
    }

    #[test]
    fn test_classify_bac() {
        let response = classify_bac(0.08).unwrap();
        assert_eq!(response.tier, RiskTier::Danger);
        assert!((response.hours_until_safe - (0.05 / 0.015)).abs() < 1e-9);

        assert_eq!(classify_bac(0.03).unwrap().tier, RiskTier::Caution);
        assert_eq!(classify_bac(0.0).unwrap().tier, RiskTier::Safe);
        assert!(classify_bac(-0.01).is_err());
        assert!(classify_bac(f64::NAN).is_err());
    }
}
