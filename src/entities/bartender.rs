// 🍸 Bartender Entity - Stable identity + a fixed drink recipe
//
// "Name is a VALUE (can change), UUID is IDENTITY (never changes)"
//
// Every bartender is registered in a BartenderRegistry the moment it is hired.
// The drink is assembled from three steps that only the bartender can run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use super::registry::BartenderRegistry;

// ============================================================================
// BARTENDER ENTITY
// ============================================================================

/// Bartender Entity - Identity/Value separation
///
/// Identity: UUID + hire time (never change)
/// Values: name (can change, visible through every shared handle)
///
/// The drink steps are private to this module:
///
/// ```compile_fail
/// use bartender::{Bartender, BartenderRegistry};
///
/// let registry = BartenderRegistry::new();
/// let phil = Bartender::new(&registry, "Phil");
/// let mut ingredients = Vec::new();
/// phil.choose_liquor(&mut ingredients);
/// ```
pub struct Bartender {
    // ========================================================================
    // IDENTITY
    // ========================================================================
    id: String,
    hired_at: DateTime<Utc>,

    // ========================================================================
    // VALUES
    // ========================================================================
    name: RwLock<String>,
}

impl Bartender {
    /// Hire a bartender and register it in `registry`
    ///
    /// Any name is accepted, empty and duplicate names included.
    /// The returned handle is shared with the registry.
    pub fn new(registry: &BartenderRegistry, name: impl Into<String>) -> Arc<Bartender> {
        let bartender = Arc::new(Bartender {
            id: uuid::Uuid::new_v4().to_string(),
            hired_at: Utc::now(),
            name: RwLock::new(name.into()),
        });

        registry.register(Arc::clone(&bartender));
        bartender
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn hired_at(&self) -> DateTime<Utc> {
        self.hired_at
    }

    /// Current name
    pub fn name(&self) -> String {
        self.name
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rename this bartender (visible through every handle, registry included)
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.write().unwrap_or_else(PoisonError::into_inner) = name.into();
    }

    /// Greeting derived from the current name
    pub fn intro(&self) -> String {
        format!("Hello, my name is {}!", self.name())
    }

    /// Mix the house drink
    ///
    /// Runs liquor → mixer → garnish on a list that lives only for this call.
    pub fn make_drink(&self) -> String {
        let mut ingredients = Vec::with_capacity(3);

        self.choose_liquor(&mut ingredients);
        self.choose_mixer(&mut ingredients);
        self.choose_garnish(&mut ingredients);

        tracing::trace!(bartender = %self.id, ?ingredients, "drink assembled");

        format!("Here is your drink. It contains {}", ingredients.join(", "))
    }

    /// Point-in-time view for serialization
    pub fn to_record(&self) -> BartenderRecord {
        BartenderRecord {
            id: self.id.clone(),
            name: self.name(),
            hired_at: self.hired_at,
        }
    }

    // ========================================================================
    // DRINK STEPS (private)
    // ========================================================================

    fn choose_liquor(&self, ingredients: &mut Vec<&'static str>) {
        ingredients.push("whiskey");
    }

    fn choose_mixer(&self, ingredients: &mut Vec<&'static str>) {
        ingredients.push("vermouth");
    }

    fn choose_garnish(&self, ingredients: &mut Vec<&'static str>) {
        ingredients.push("olives");
    }
}

impl fmt::Debug for Bartender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bartender")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}

// ============================================================================
// BARTENDER RECORD
// ============================================================================

/// Serializable snapshot of a bartender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BartenderRecord {
    pub id: String,
    pub name: String,
    pub hired_at: DateTime<Utc>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DRINK: &str = "Here is your drink. It contains whiskey, vermouth, olives";

    #[test]
    fn test_bartender_creation() {
        let registry = BartenderRegistry::new();
        let phil = Bartender::new(&registry, "Phil");

        assert!(!phil.id().is_empty());
        assert_eq!(phil.name(), "Phil");
        assert!(phil.hired_at() <= Utc::now());
    }

    #[test]
    fn test_name_round_trip() {
        let registry = BartenderRegistry::new();

        for name in ["", "Phil", "Nancy O'Brien", "Zoë 🍸", "  padded  "] {
            let bartender = Bartender::new(&registry, name);
            assert_eq!(bartender.name(), name);
        }
    }

    #[test]
    fn test_set_name() {
        let registry = BartenderRegistry::new();
        let phil = Bartender::new(&registry, "Phil");

        phil.set_name("Philip");

        assert_eq!(phil.name(), "Philip");
        assert_eq!(phil.intro(), "Hello, my name is Philip!");
    }

    #[test]
    fn test_intro() {
        let registry = BartenderRegistry::new();
        let phil = Bartender::new(&registry, "Phil");
        let nancy = Bartender::new(&registry, "Nancy");

        assert_eq!(phil.intro(), "Hello, my name is Phil!");
        assert_eq!(nancy.intro(), "Hello, my name is Nancy!");
    }

    #[test]
    fn test_intro_empty_name() {
        let registry = BartenderRegistry::new();
        let nobody = Bartender::new(&registry, "");

        assert_eq!(nobody.intro(), "Hello, my name is !");
    }

    #[test]
    fn test_make_drink_is_fixed() {
        let registry = BartenderRegistry::new();
        let phil = Bartender::new(&registry, "Phil");
        let nancy = Bartender::new(&registry, "Nancy");

        for _ in 0..5 {
            assert_eq!(phil.make_drink(), DRINK);
        }
        assert_eq!(nancy.make_drink(), DRINK);
    }

    #[test]
    fn test_drink_steps_in_order() {
        let registry = BartenderRegistry::new();
        let phil = Bartender::new(&registry, "Phil");
        let mut ingredients = Vec::new();

        phil.choose_liquor(&mut ingredients);
        phil.choose_mixer(&mut ingredients);
        phil.choose_garnish(&mut ingredients);

        assert_eq!(ingredients, vec!["whiskey", "vermouth", "olives"]);
    }

    #[test]
    fn test_later_hire_leaves_earlier_untouched() {
        let registry = BartenderRegistry::new();
        let phil = Bartender::new(&registry, "Phil");
        let intro_before = phil.intro();
        let drink_before = phil.make_drink();

        let _nancy = Bartender::new(&registry, "Nancy");

        assert_eq!(phil.name(), "Phil");
        assert_eq!(phil.intro(), intro_before);
        assert_eq!(phil.make_drink(), drink_before);
    }

    #[test]
    fn test_duplicate_names_get_distinct_ids() {
        let registry = BartenderRegistry::new();
        let a = Bartender::new(&registry, "Sam");
        let b = Bartender::new(&registry, "Sam");

        assert_ne!(a.id(), b.id());
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_to_record() {
        let registry = BartenderRegistry::new();
        let nancy = Bartender::new(&registry, "Nancy");

        let record = nancy.to_record();

        assert_eq!(record.id, nancy.id());
        assert_eq!(record.name, "Nancy");
        assert_eq!(record.hired_at, nancy.hired_at());
    }

    #[test]
    fn test_debug_shows_name() {
        let registry = BartenderRegistry::new();
        let phil = Bartender::new(&registry, "Phil");

        let debug = format!("{:?}", phil);

        assert!(debug.starts_with("Bartender"));
        assert!(debug.contains("name: \"Phil\""));
        assert!(debug.contains(phil.id()));
    }
}
