use serde::{Deserialize, Serialize};

/// Per-seat fares by travel class, in display order.
///
/// Prices are whole euros per passenger. An unknown class has no fare; the
/// derived total for an unknown class is 0 rather than an error, because the
/// class field may hold arbitrary text while the user is still editing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareTable {
    fares: Vec<(String, i32)>,
}

impl Default for FareTable {
    fn default() -> Self {
        Self {
            fares: vec![
                ("Turista".to_string(), 100),
                ("Business".to_string(), 250),
                ("Primera clase".to_string(), 500),
            ],
        }
    }
}

impl FareTable {
    /// Build a fare table from custom class/price pairs.
    pub fn new(fares: Vec<(String, i32)>) -> Result<Self, FareError> {
        if fares.is_empty() {
            return Err(FareError::EmptyTable);
        }
        for (class, price) in &fares {
            if class.trim().is_empty() {
                return Err(FareError::BlankClass);
            }
            if *price <= 0 {
                return Err(FareError::NonPositiveFare {
                    class: class.clone(),
                    price: *price,
                });
            }
        }
        Ok(Self { fares })
    }

    /// Travel classes in display order.
    pub fn classes(&self) -> Vec<&str> {
        self.fares.iter().map(|(class, _)| class.as_str()).collect()
    }

    /// Per-seat fare for a class, if the class is known.
    pub fn fare(&self, travel_class: &str) -> Option<i32> {
        self.fares
            .iter()
            .find(|(class, _)| class == travel_class)
            .map(|(_, price)| *price)
    }

    /// Derived total: fare × passenger count for a known class and a count
    /// of at least one, otherwise 0.
    pub fn total_price(&self, travel_class: &str, passenger_count: i32) -> i32 {
        if passenger_count < 1 {
            return 0;
        }
        match self.fare(travel_class) {
            Some(fare) => fare * passenger_count,
            None => 0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FareError {
    #[error("Fare table must not be empty")]
    EmptyTable,

    #[error("Fare table contains a blank class name")]
    BlankClass,

    #[error("Fare for class {class:?} must be positive, got {price}")]
    NonPositiveFare { class: String, price: i32 },
}
