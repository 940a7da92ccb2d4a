//! Region 1 coefficients (IAPWS-IF97 and its 2001 supplementary release).

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use crate::support::thermo::model::if97::core::series::Term;

/// Gibbs free energy γ(π, τ), terms `n (7.1 − π)^I (τ − 1.222)^J`.
pub(super) const GIBBS: [Term; 34] = [
    Term::new(0, -2, 0.14632971213167),
    Term::new(0, -1, -0.84548187169114),
    Term::new(0, 0, -3.756360367204),
    Term::new(0, 1, 3.3855169168385),
    Term::new(0, 2, -0.95791963387872),
    Term::new(0, 3, 0.15772038513228),
    Term::new(0, 4, -0.016616417199501),
    Term::new(0, 5, 8.1214629983568e-4),
    Term::new(1, -9, 2.8319080123804e-4),
    Term::new(1, -7, -6.0706301565874e-4),
    Term::new(1, -1, -0.018990068218419),
    Term::new(1, 0, -0.032529748770505),
    Term::new(1, 1, -0.021841717175414),
    Term::new(1, 3, -5.283835796993e-5),
    Term::new(2, -3, -4.7184321073267e-4),
    Term::new(2, 0, -3.0001780793026e-4),
    Term::new(2, 1, 4.7661393906987e-5),
    Term::new(2, 3, -4.4141845330846e-6),
    Term::new(2, 17, -7.2694996297594e-16),
    Term::new(3, -4, -3.1679644845054e-5),
    Term::new(3, 0, -2.8270797985312e-6),
    Term::new(3, 6, -8.5205128120103e-10),
    Term::new(4, -5, -2.2425281908e-6),
    Term::new(4, -2, -6.5171222895601e-7),
    Term::new(4, 10, -1.4341729937924e-13),
    Term::new(5, -8, -4.0516996860117e-7),
    Term::new(8, -11, -1.2734301741641e-9),
    Term::new(8, -6, -1.7424871230634e-10),
    Term::new(21, -29, -6.8762131295531e-19),
    Term::new(23, -31, 1.4478307828521e-20),
    Term::new(29, -38, 2.6335781662795e-23),
    Term::new(30, -39, -1.1947622640071e-23),
    Term::new(31, -40, 1.8228094581404e-24),
    Term::new(32, -41, -9.3537087292458e-26),
];

/// Backward equation T(p, h), terms `n π^I (η + 1)^J`.
pub(super) const TEMPERATURE_PH: [Term; 20] = [
    Term::new(0, 0, -238.72489924521),
    Term::new(0, 1, 404.21188637945),
    Term::new(0, 2, 113.49746881718),
    Term::new(0, 6, -5.8457616048039),
    Term::new(0, 22, -1.528548241314e-4),
    Term::new(0, 32, -1.0866707695377e-6),
    Term::new(1, 0, -13.391744872602),
    Term::new(1, 1, 43.211039183559),
    Term::new(1, 2, -54.010067170506),
    Term::new(1, 3, 30.535892203916),
    Term::new(1, 4, -6.5964749423638),
    Term::new(1, 10, 9.3965400878363e-3),
    Term::new(1, 32, 1.157364750534e-7),
    Term::new(2, 10, -2.5858641282073e-5),
    Term::new(2, 32, -4.0644363084799e-9),
    Term::new(3, 10, 6.6456186191635e-8),
    Term::new(3, 32, 8.0670734103027e-11),
    Term::new(4, 32, -9.3477771213947e-13),
    Term::new(5, 32, 5.8265442020601e-15),
    Term::new(6, 32, -1.5020185953503e-17),
];

/// Backward equation p(h, s), terms `n (η + 0.05)^I (σ + 0.05)^J`.
pub(super) const PRESSURE_HS: [Term; 19] = [
    Term::new(0, 0, -0.691997014660582),
    Term::new(0, 1, -18.361254878756),
    Term::new(0, 2, -9.28332409297335),
    Term::new(0, 4, 65.9639569909906),
    Term::new(0, 5, -16.2060388912024),
    Term::new(0, 6, 450.620017338667),
    Term::new(0, 8, 854.68067822417),
    Term::new(0, 14, 6_075.23214001162),
    Term::new(1, 0, 32.6487682621856),
    Term::new(1, 1, -26.9408844582931),
    Term::new(1, 4, -319.9478483343),
    Term::new(1, 6, -928.35430704332),
    Term::new(2, 0, 30.3634537455249),
    Term::new(2, 1, -65.0540422444146),
    Term::new(2, 10, -4_309.9131651613),
    Term::new(3, 4, -747.512324096068),
    Term::new(4, 1, 730.000345529245),
    Term::new(4, 4, 1_142.84032569021),
    Term::new(5, 0, -436.407041874559),
];
