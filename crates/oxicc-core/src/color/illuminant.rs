//! CIE Standard Illuminants
//!
//! Chromaticity coordinates for both the 1931 2° and 1964 10° observers,
//! with the nominal correlated color temperature of each illuminant.

use crate::color::Xyz;
use crate::math::cct;

/// D50 reference white as XYZ (2° observer), the ICC PCS illuminant
pub const D50: Xyz = Xyz::new(0.96422, 1.0, 0.82521);

/// A named CIE standard illuminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CieIlluminant {
    /// Incandescent / tungsten
    A,
    /// Direct sunlight at noon (obsolete)
    B,
    /// Average / north sky daylight (obsolete)
    C,
    /// Horizon light, the ICC profile PCS illuminant
    D50,
    /// Mid-morning / mid-afternoon daylight
    D55,
    /// Noon daylight: television, sRGB color space
    D65,
    /// North sky daylight
    D75,
    /// Equal energy
    E,
    /// Daylight fluorescent
    F1,
    /// Cool white fluorescent
    F2,
    /// White fluorescent
    F3,
    /// Warm white fluorescent
    F4,
    /// Daylight fluorescent
    F5,
    /// Lite white fluorescent
    F6,
    /// D65 simulator
    F7,
    /// D50 simulator, Sylvania F40 Design 50
    F8,
    /// Cool white deluxe fluorescent
    F9,
    /// Philips TL85, Ultralume 50
    F10,
    /// Philips TL84, Ultralume 40
    F11,
    /// Philips TL83, Ultralume 30
    F12,
}

/// (2° x, 2° y, 10° x, 10° y, CCT)
type IlluminantRow = (f64, f64, f64, f64, f64);

impl CieIlluminant {
    /// Every named illuminant, in table order
    pub const ALL: [Self; 20] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D50,
        Self::D55,
        Self::D65,
        Self::D75,
        Self::E,
        Self::F1,
        Self::F2,
        Self::F3,
        Self::F4,
        Self::F5,
        Self::F6,
        Self::F7,
        Self::F8,
        Self::F9,
        Self::F10,
        Self::F11,
        Self::F12,
    ];

    const fn row(self) -> IlluminantRow {
        match self {
            Self::A => (0.44757, 0.40745, 0.45117, 0.40594, 2856.0),
            Self::B => (0.34842, 0.35161, 0.3498, 0.3527, 4874.0),
            Self::C => (0.31006, 0.31616, 0.31039, 0.31905, 6774.0),
            Self::D50 => (0.34567, 0.35850, 0.34773, 0.35952, 5003.0),
            Self::D55 => (0.33242, 0.34743, 0.33411, 0.34877, 5503.0),
            Self::D65 => (0.31271, 0.32902, 0.31382, 0.33100, 6504.0),
            Self::D75 => (0.29902, 0.31485, 0.29968, 0.31740, 7504.0),
            Self::E => (1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 5454.0),
            Self::F1 => (0.31310, 0.33727, 0.31811, 0.33559, 6430.0),
            Self::F2 => (0.37208, 0.37529, 0.37925, 0.36733, 4230.0),
            Self::F3 => (0.40910, 0.39430, 0.41761, 0.38324, 3450.0),
            Self::F4 => (0.44018, 0.40329, 0.44920, 0.39074, 2940.0),
            Self::F5 => (0.31379, 0.34531, 0.31975, 0.34246, 6350.0),
            Self::F6 => (0.37790, 0.38835, 0.38660, 0.37847, 4150.0),
            Self::F7 => (0.31292, 0.32933, 0.31569, 0.32960, 6500.0),
            Self::F8 => (0.34588, 0.35875, 0.34902, 0.35939, 5000.0),
            Self::F9 => (0.37417, 0.37281, 0.37829, 0.37045, 4150.0),
            Self::F10 => (0.34609, 0.35986, 0.35090, 0.35444, 5000.0),
            Self::F11 => (0.38052, 0.37713, 0.38541, 0.37123, 4000.0),
            Self::F12 => (0.43695, 0.40441, 0.44256, 0.39717, 3000.0),
        }
    }

    /// Chromaticity under the CIE 1931 2° observer
    pub fn xy_1931(self) -> (f64, f64) {
        let (x, y, _, _, _) = self.row();
        (x, y)
    }

    /// Chromaticity under the CIE 1964 10° observer
    pub fn xy_1964(self) -> (f64, f64) {
        let (_, _, x, y, _) = self.row();
        (x, y)
    }

    /// Nominal correlated color temperature in Kelvin
    pub fn cct(self) -> f64 {
        let (_, _, _, _, t) = self.row();
        t
    }

    /// Chromaticity as (x, y, Y) with Y = 1, 2° observer
    pub fn xyy(self) -> (f64, f64, f64) {
        let (x, y) = self.xy_1931();
        (x, y, 1.0)
    }

    /// White point as XYZ (Y = 1), 2° observer
    pub fn xyz(self) -> Xyz {
        let (x, y, big_y) = self.xyy();
        Xyz::from_xyy(x, y, big_y)
    }

    /// The illuminant's name ("D65", "F11", ...)
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D65 => "D65",
            Self::D75 => "D75",
            Self::E => "E",
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::F3 => "F3",
            Self::F4 => "F4",
            Self::F5 => "F5",
            Self::F6 => "F6",
            Self::F7 => "F7",
            Self::F8 => "F8",
            Self::F9 => "F9",
            Self::F10 => "F10",
            Self::F11 => "F11",
            Self::F12 => "F12",
        }
    }

    /// Look up an illuminant by name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        Self::ALL.iter().copied().find(|i| i.name() == upper)
    }
}

/// A reference white point: a named illuminant, a correlated daylight
/// temperature in Kelvin, or an explicit XYZ triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceWhite {
    Illuminant(CieIlluminant),
    Cct(f64),
    Xyz(Xyz),
}

impl ReferenceWhite {
    /// Resolve to XYZ; `None` when a CCT falls outside the daylight locus
    pub fn resolve(&self) -> Option<Xyz> {
        match *self {
            Self::Illuminant(i) => Some(i.xyz()),
            Self::Cct(t) => cct::daylight_xyz(t),
            Self::Xyz(v) => Some(v),
        }
    }
}

impl Default for ReferenceWhite {
    /// D50, the ICC profile connection space white
    fn default() -> Self {
        Self::Xyz(D50)
    }
}

impl From<CieIlluminant> for ReferenceWhite {
    fn from(i: CieIlluminant) -> Self {
        Self::Illuminant(i)
    }
}

impl From<f64> for ReferenceWhite {
    fn from(kelvin: f64) -> Self {
        Self::Cct(kelvin)
    }
}

impl From<Xyz> for ReferenceWhite {
    fn from(xyz: Xyz) -> Self {
        Self::Xyz(xyz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(CieIlluminant::from_name("d65"), Some(CieIlluminant::D65));
        assert_eq!(CieIlluminant::from_name("F11"), Some(CieIlluminant::F11));
        assert_eq!(CieIlluminant::from_name("D93"), None);
    }

    #[test]
    fn test_d65_chromaticity() {
        let (x, y) = CieIlluminant::D65.xy_1931();
        assert!((x - 0.31271).abs() < 1e-6);
        assert!((y - 0.32902).abs() < 1e-6);
        assert!((CieIlluminant::D65.cct() - 6504.0).abs() < 1e-6);
    }

    #[test]
    fn test_d50_xyz_close_to_pcs_constant() {
        let xyz = CieIlluminant::D50.xyz();
        assert!(xyz.approx_eq(&D50, 1e-3));
    }

    #[test]
    fn test_reference_white_resolution() {
        assert!(ReferenceWhite::default().resolve().is_some());
        assert!(ReferenceWhite::Cct(6504.0).resolve().is_some());
        assert!(ReferenceWhite::Cct(100.0).resolve().is_none());

        let explicit = ReferenceWhite::Xyz(Xyz::new(0.9505, 1.0, 1.089));
        assert_eq!(explicit.resolve(), Some(Xyz::new(0.9505, 1.0, 1.089)));
    }
}
