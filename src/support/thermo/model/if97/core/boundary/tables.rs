//! Boundary curve coefficients (IAPWS-IF97 and its 2004 supplementary release).

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use crate::support::thermo::model::if97::core::series::Term;

/// B23 temperature T(h, s), terms `n (η − 0.727)^I (σ − 0.864)^J`.
pub(super) const TEMPERATURE_B23_HS: [Term; 25] = [
    Term::new(-12, 10, 0.629096260829810e-3),
    Term::new(-10, 8, -0.823453502583165e-3),
    Term::new(-8, 3, 0.515446951519474e-7),
    Term::new(-4, 4, -0.117565945784945e1),
    Term::new(-3, 3, 0.348519684726192e1),
    Term::new(-2, -6, -0.507837382408313e-11),
    Term::new(-2, 2, -0.284637670005479e1),
    Term::new(-2, 3, -0.236092263939673e1),
    Term::new(-2, 4, 0.601492324973779e1),
    Term::new(0, 0, 0.148039650824546e1),
    Term::new(1, -3, 0.360075182221907e-3),
    Term::new(1, -2, -0.126700045009952e-1),
    Term::new(1, 10, -0.122184332521413e7),
    Term::new(3, -2, 0.149276502463272),
    Term::new(3, -1, 0.698733471798484),
    Term::new(5, -5, -0.252207040114321e-1),
    Term::new(6, -6, 0.147151930985213e-1),
    Term::new(6, -3, -0.108618917681849e1),
    Term::new(8, -8, -0.936875039816322e-3),
    Term::new(8, -2, 0.819877897570217e2),
    Term::new(8, -1, -0.182041861521835e3),
    Term::new(12, -12, 0.261907376402688e-5),
    Term::new(12, -1, -0.291626417025961e5),
    Term::new(14, -12, 0.140660774926165e-4),
    Term::new(14, 1, 0.783237062349385e7),
];

/// 3/4 boundary p_sat(h), terms `n (η − 1.02)^I (η − 0.608)^J`.
pub(super) const SATURATION_PRESSURE_H: [Term; 14] = [
    Term::new(0, 0, 0.600073641753024),
    Term::new(1, 1, -9.36203654849857),
    Term::new(1, 3, 24.6590798594147),
    Term::new(1, 4, -107.014222858224),
    Term::new(1, 36, -91_582_131_580_576.8),
    Term::new(5, 3, -8_623.32011700662),
    Term::new(7, 0, -23.5837344740032),
    Term::new(8, 24, 2.52304969384128e17),
    Term::new(14, 16, -3.89718771997719e18),
    Term::new(20, 16, -3.33775713645296e22),
    Term::new(22, 3, 35_649_946_963.6328),
    Term::new(24, 18, -1.48547544720641e26),
    Term::new(28, 8, 3.30611514838798e18),
    Term::new(36, 24, 8.13641294467829e37),
];

/// Saturated liquid h′(s) bordering region 1, terms `n (σ − 1.09)^I (σ + 0.366e-4)^J`.
pub(super) const ENTHALPY_1: [Term; 27] = [
    Term::new(0, 14, 0.332171191705237),
    Term::new(0, 36, 0.611217706323496e-3),
    Term::new(1, 3, -0.882092478906822e1),
    Term::new(1, 16, -0.455628192543250),
    Term::new(2, 0, -0.263483840850452e-4),
    Term::new(2, 5, -0.223949661148062e2),
    Term::new(3, 4, -0.428398660164013e1),
    Term::new(3, 36, -0.616679338856916),
    Term::new(4, 4, -0.146823031104040e2),
    Term::new(4, 16, 0.284523138727299e3),
    Term::new(4, 24, -0.113398503195444e3),
    Term::new(5, 18, 0.115671380760859e4),
    Term::new(5, 24, 0.395551267359325e3),
    Term::new(7, 1, -0.154891257229285e1),
    Term::new(8, 4, 0.194486637751291e2),
    Term::new(12, 2, -0.357915139457043e1),
    Term::new(12, 4, -0.335369414148819e1),
    Term::new(14, 1, -0.664426796332460),
    Term::new(14, 22, 0.323321885383934e5),
    Term::new(16, 10, 0.331766744667084e4),
    Term::new(20, 12, -0.223501257931087e5),
    Term::new(20, 28, 0.573953875852936e7),
    Term::new(22, 8, 0.173226193407919e3),
    Term::new(24, 3, -0.363968822121321e-1),
    Term::new(28, 0, 0.834596332878346e-6),
    Term::new(32, 6, 0.503611916682674e1),
    Term::new(32, 8, 0.655444787064505e2),
];

/// Saturated liquid h′(s) bordering region 3a, terms `n (σ − 1.09)^I (σ + 0.366e-4)^J`.
pub(super) const ENTHALPY_3A: [Term; 19] = [
    Term::new(0, 1, 0.822673364673336),
    Term::new(0, 4, 0.181977213534479),
    Term::new(0, 10, -0.112000260313624e-1),
    Term::new(0, 16, -0.746778287048033e-3),
    Term::new(2, 1, -0.179046263257381),
    Term::new(3, 36, 0.424220110836657e-1),
    Term::new(4, 3, -0.341355823438768),
    Term::new(4, 16, -0.209881740853565e1),
    Term::new(5, 20, -0.822477343323596e1),
    Term::new(5, 36, -0.499684082076008e1),
    Term::new(6, 4, 0.191413958471069),
    Term::new(7, 2, 0.581062241093136e-1),
    Term::new(7, 28, -0.165505498701029e4),
    Term::new(7, 32, 0.158870443421201e4),
    Term::new(10, 14, -0.850623535172818e2),
    Term::new(10, 32, -0.317714386511207e5),
    Term::new(10, 36, -0.945890406632871e5),
    Term::new(32, 0, -0.139273847088690e-5),
    Term::new(32, 6, 0.631052532240980),
];

/// Saturated vapour h″(s) bordering regions 2a and 2b, terms `n (5.21/s − 0.513)^I (s/9.2 − 0.524)^J`.
pub(super) const ENTHALPY_2AB: [Term; 30] = [
    Term::new(1, 8, -0.524581170928788e3),
    Term::new(1, 24, -0.926947218142218e7),
    Term::new(2, 4, -0.237385107491666e3),
    Term::new(2, 32, 0.210770155812776e11),
    Term::new(4, 1, -0.239494562010986e2),
    Term::new(4, 2, 0.221802480294197e3),
    Term::new(7, 7, -0.510472533393438e7),
    Term::new(8, 5, 0.124981396109147e7),
    Term::new(8, 12, 0.200008436996201e10),
    Term::new(10, 1, -0.815158509791035e3),
    Term::new(12, 0, -0.157612685637523e3),
    Term::new(12, 7, -0.114200422332791e11),
    Term::new(18, 10, 0.662364680776872e16),
    Term::new(20, 12, -0.227622818296144e19),
    Term::new(24, 32, -0.171048081348406e32),
    Term::new(28, 8, 0.660788766938091e16),
    Term::new(28, 12, 0.166320055886021e23),
    Term::new(28, 20, -0.218003784381501e30),
    Term::new(28, 22, -0.787276140295618e30),
    Term::new(28, 24, 0.151062329700346e32),
    Term::new(32, 2, 0.795732170300541e7),
    Term::new(32, 7, 0.131957647355347e16),
    Term::new(32, 12, -0.325097068299140e24),
    Term::new(32, 14, -0.418600611419248e26),
    Term::new(32, 24, 0.297478906557467e35),
    Term::new(36, 10, -0.953588761745473e20),
    Term::new(36, 12, 0.166957699620939e25),
    Term::new(36, 20, -0.175407764869978e33),
    Term::new(36, 22, 0.347581490626396e35),
    Term::new(36, 28, -0.710971318427851e39),
];

/// Saturated vapour h″(s) bordering regions 2c and 3b, terms `n (σ − 1.02)^I (σ − 0.726)^J`.
pub(super) const ENTHALPY_2C3B: [Term; 16] = [
    Term::new(0, 0, 0.104351280732769e1),
    Term::new(0, 3, -0.227807912708513e1),
    Term::new(0, 4, 0.180535256723202e1),
    Term::new(1, 0, 0.420440834792042),
    Term::new(1, 12, -0.105721244834660e6),
    Term::new(5, 36, 0.436911607493884e25),
    Term::new(6, 12, -0.328032702839753e12),
    Term::new(7, 16, -0.678686760804270e16),
    Term::new(8, 2, 0.743957464645363e4),
    Term::new(8, 20, -0.356896445355761e20),
    Term::new(12, 32, 0.167590585186801e32),
    Term::new(16, 36, -0.355028625419105e38),
    Term::new(22, 2, 0.396611982166538e12),
    Term::new(22, 32, -0.414716268484468e41),
    Term::new(24, 7, 0.359080103867382e19),
    Term::new(36, 20, -0.116994334851995e41),
];

/// Boundary between regions 1 and 3, terms `n (σ − 0.884)^I (σ − 0.864)^J`.
pub(super) const ENTHALPY_B13: [Term; 6] = [
    Term::new(0, 0, 0.913965547600543),
    Term::new(1, -2, -0.430944856041991e-4),
    Term::new(1, 2, 0.603235694765419e2),
    Term::new(3, -12, 0.117518273082168e-17),
    Term::new(5, -4, 0.220000904781292),
    Term::new(6, -3, -0.690815545851641e2),
];
