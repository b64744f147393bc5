//! Emission and calorie metrics
//!
//! Both metrics are linear in distance. No validation is applied: zero or
//! negative distances go through the same formula.

/// Kilograms of CO₂ emitted per kilometer driven by an average car
pub const CO2_KG_PER_KM: f64 = 0.21;

/// Calories burned per kilometer cycled
pub const CALORIES_PER_KM: f64 = 50.0;

/// Estimated CO₂ emissions in kilograms for a driving distance
#[must_use]
pub fn emissions_kg(distance_km: f64) -> f64 {
    distance_km * CO2_KG_PER_KM
}

/// Estimated calories burned for a biking distance
#[must_use]
pub fn calories_burned(distance_km: f64) -> f64 {
    distance_km * CALORIES_PER_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn emissions_for_ten_km() {
        assert!(approx_eq(emissions_kg(10.0), 2.1));
    }

    #[test]
    fn calories_for_ten_km() {
        assert!(approx_eq(calories_burned(10.0), 500.0));
    }

    #[test]
    fn zero_distance_yields_zero() {
        assert!(approx_eq(emissions_kg(0.0), 0.0));
        assert!(approx_eq(calories_burned(0.0), 0.0));
    }

    #[test]
    fn negative_distance_passes_through() {
        assert!(approx_eq(emissions_kg(-1.0), -0.21));
        assert!(approx_eq(calories_burned(-2.0), -100.0));
    }

    #[test]
    fn twelve_km_drive() {
        assert!(approx_eq(emissions_kg(12.0), 2.52));
    }
}
