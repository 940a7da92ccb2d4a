//! Region 4 coefficients (IAPWS 2004 supplementary release).

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use crate::support::thermo::model::if97::core::series::Term;

/// Saturation temperature T_sat(h, s), terms `n (η − 0.119)^I (σ − 1.07)^J`.
pub(super) const TEMPERATURE_HS: [Term; 36] = [
    Term::new(0, 0, 0.179882673606601),
    Term::new(0, 3, -0.267507455199603),
    Term::new(0, 12, 0.116276722612600e1),
    Term::new(1, 0, 0.147545428713616),
    Term::new(1, 1, -0.512871635973248),
    Term::new(1, 2, 0.421333567697984),
    Term::new(1, 5, 0.563749522189870),
    Term::new(2, 0, 0.429274443819153),
    Term::new(2, 5, -0.335704552142140e1),
    Term::new(2, 8, 0.108890916499278e2),
    Term::new(3, 0, -0.248483390456012),
    Term::new(3, 2, 0.304153221906390),
    Term::new(3, 3, -0.494819763939905),
    Term::new(3, 4, 0.107551674933261e1),
    Term::new(4, 0, 0.733888415457688e-1),
    Term::new(4, 1, 0.140170545411085e-1),
    Term::new(5, 1, -0.106110975998808),
    Term::new(5, 2, 0.168324361811875e-1),
    Term::new(5, 4, 0.125028363714877e1),
    Term::new(5, 16, 0.101316840309509e4),
    Term::new(6, 6, -0.151791558000712e1),
    Term::new(6, 8, 0.524277865990866e2),
    Term::new(6, 22, 0.230495545563912e5),
    Term::new(8, 1, 0.249459806365456e-1),
    Term::new(10, 20, 0.210796467412137e7),
    Term::new(10, 36, 0.366836848613065e9),
    Term::new(12, 24, -0.144814105365163e9),
    Term::new(14, 1, -0.179276373003590e-2),
    Term::new(14, 28, 0.489955602100459e10),
    Term::new(16, 12, 0.471262212070518e3),
    Term::new(16, 32, -0.829294390198652e11),
    Term::new(18, 14, -0.171545662263191e4),
    Term::new(18, 22, 0.355777682973575e7),
    Term::new(18, 36, 0.586062760258436e12),
    Term::new(20, 24, -0.129887635078195e8),
    Term::new(28, 36, 0.317247449371057e11),
];
