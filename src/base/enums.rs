use serde::{Deserialize, Serialize};

/// Identifies one of the three sampled curves
///
/// All curves depend on the wetting-phase saturation `Sw`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Curve {
    /// Capillary pressure `pcwn(Sw)`
    CapillaryPressure = 0,

    /// Relative permeability of the wetting phase `krw(Sw)`
    WettingRelPerm = 1,

    /// Relative permeability of the non-wetting phase `krn(Sw)`
    NonWettingRelPerm = 2,
}

impl Curve {
    /// Returns all curves, in the order they are finalized
    pub fn all() -> [Curve; 3] {
        [Curve::CapillaryPressure, Curve::WettingRelPerm, Curve::NonWettingRelPerm]
    }

    /// Returns a short name (e.g., for printing tables)
    pub fn name(&self) -> &'static str {
        match self {
            Curve::CapillaryPressure => "pcwn",
            Curve::WettingRelPerm => "krw",
            Curve::NonWettingRelPerm => "krn",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Curve;
    use std::collections::HashSet;

    #[test]
    fn derive_works() {
        let curve = Curve::WettingRelPerm;
        let clone = curve.clone();
        assert_eq!(format!("{:?}", clone), "WettingRelPerm");
        assert_eq!(curve, clone);
        assert!(Curve::CapillaryPressure < Curve::NonWettingRelPerm);

        let mut set = HashSet::new();
        set.insert(Curve::CapillaryPressure);
        set.insert(Curve::CapillaryPressure);
        assert_eq!(set.len(), 1);

        let json = serde_json::to_string(&curve).unwrap();
        assert_eq!(json, "\"WettingRelPerm\"");
        let read: Curve = serde_json::from_str(&json).unwrap();
        assert_eq!(read, curve);
    }

    #[test]
    fn all_and_name_work() {
        let names: Vec<_> = Curve::all().iter().map(|c| c.name()).collect();
        assert_eq!(names, &["pcwn", "krw", "krn"]);
        assert_eq!(Curve::all()[1] as usize, 1);
    }
}
