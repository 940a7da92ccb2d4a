//! Region 2 coefficients (IAPWS-IF97 and its 2001 supplementary release).

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use crate::support::thermo::model::if97::core::series::Term;

/// Ideal-gas part γ⁰, terms `n τ^J` (`I` unused).
pub(super) const IDEAL: [Term; 9] = [
    Term::new(0, 0, -0.96927686500217e1),
    Term::new(0, 1, 0.10086655968018e2),
    Term::new(0, -5, -0.56087911283020e-2),
    Term::new(0, -4, 0.71452738081455e-1),
    Term::new(0, -3, -0.40710498223928),
    Term::new(0, -2, 0.14240819171444e1),
    Term::new(0, -1, -0.43839511319450e1),
    Term::new(0, 2, -0.28408632460772),
    Term::new(0, 3, 0.21268463753307e-1),
];

/// Residual part γʳ, terms `n π^I (τ − 0.5)^J`.
pub(super) const RESIDUAL: [Term; 43] = [
    Term::new(1, 0, -1.7731742473213e-3),
    Term::new(1, 1, -0.017834862292358),
    Term::new(1, 2, -0.045996013696365),
    Term::new(1, 3, -0.057581259083432),
    Term::new(1, 6, -0.05032527872793),
    Term::new(2, 1, -3.3032641670203e-5),
    Term::new(2, 2, -1.8948987516315e-4),
    Term::new(2, 4, -3.9392777243355e-3),
    Term::new(2, 7, -0.043797295650573),
    Term::new(2, 36, -2.6674547914087e-5),
    Term::new(3, 0, 2.0481737692309e-8),
    Term::new(3, 1, 4.3870667284435e-7),
    Term::new(3, 3, -3.227767723857e-5),
    Term::new(3, 6, -1.5033924542148e-3),
    Term::new(3, 35, -0.040668253562649),
    Term::new(4, 1, -7.8847309559367e-10),
    Term::new(4, 2, 1.2790717852285e-8),
    Term::new(4, 3, 4.8225372718507e-7),
    Term::new(5, 7, 2.2922076337661e-6),
    Term::new(6, 3, -1.6714766451061e-11),
    Term::new(6, 16, -2.1171472321355e-3),
    Term::new(6, 35, -23.895741934104),
    Term::new(7, 0, -5.905956432427e-18),
    Term::new(7, 11, -1.2621808899101e-6),
    Term::new(7, 25, -0.038946842435739),
    Term::new(8, 8, 1.1256211360459e-11),
    Term::new(8, 36, -8.2311340897998),
    Term::new(9, 13, 1.9809712802088e-8),
    Term::new(10, 4, 1.0406965210174e-19),
    Term::new(10, 10, -1.0234747095929e-13),
    Term::new(10, 14, -1.0018179379511e-9),
    Term::new(16, 29, -8.0882908646985e-11),
    Term::new(16, 50, 0.10693031879409),
    Term::new(18, 57, -0.33662250574171),
    Term::new(20, 20, 8.9185845355421e-25),
    Term::new(20, 35, 3.0629316876232e-13),
    Term::new(20, 48, -4.2002467698208e-6),
    Term::new(21, 21, -5.9056029685639e-26),
    Term::new(22, 53, 3.7826947613457e-6),
    Term::new(23, 39, -1.2768608934681e-15),
    Term::new(24, 26, 7.3087610595061e-29),
    Term::new(24, 40, 5.5414715350778e-17),
    Term::new(24, 58, -9.436970724121e-7),
];

/// Backward T(p, h) in sub-region 2a, terms `n π^I (η − 2.1)^J`.
pub(super) const TEMPERATURE_PH_2A: [Term; 34] = [
    Term::new(0, 0, 1_089.8952318288),
    Term::new(0, 1, 849.51654495535),
    Term::new(0, 2, -107.81748091826),
    Term::new(0, 3, 33.153654801263),
    Term::new(0, 7, -7.4232016790248),
    Term::new(0, 20, 11.765048724356),
    Term::new(1, 0, 1.844574935579),
    Term::new(1, 1, -4.1792700549624),
    Term::new(1, 2, 6.2478196935812),
    Term::new(1, 3, -17.344563108114),
    Term::new(1, 7, -200.58176862096),
    Term::new(1, 9, 271.96065473796),
    Term::new(1, 11, -455.11318285818),
    Term::new(1, 18, 3_091.9688604755),
    Term::new(1, 44, 252_266.40357872),
    Term::new(2, 0, -6.1707422868339e-3),
    Term::new(2, 2, -0.31078046629583),
    Term::new(2, 7, 11.670873077107),
    Term::new(2, 36, 128_127_984.04046),
    Term::new(2, 38, -985_549_096.23276),
    Term::new(2, 40, 2_822_454_697.3002),
    Term::new(2, 42, -3_594_897_141.0703),
    Term::new(2, 44, 1_722_734_991.3197),
    Term::new(3, 24, -13_551.334240775),
    Term::new(3, 44, 12_848_734.66465),
    Term::new(4, 12, 1.3865724283226),
    Term::new(4, 32, 235_988.32556514),
    Term::new(4, 44, -13_105_236.545054),
    Term::new(5, 32, 7_399.9835474766),
    Term::new(5, 36, -551_966.9703006),
    Term::new(5, 42, 3_715_408.5996233),
    Term::new(6, 34, 19_127.72923966),
    Term::new(6, 44, -415_351.64835634),
    Term::new(7, 28, -62.459855192507),
];

/// Backward T(p, h) in sub-region 2b, terms `n (π − 2)^I (η − 2.6)^J`.
pub(super) const TEMPERATURE_PH_2B: [Term; 38] = [
    Term::new(0, 0, 1_489.5041079516),
    Term::new(0, 1, 743.07798314034),
    Term::new(0, 2, -97.708318797837),
    Term::new(0, 12, 2.4742464705674),
    Term::new(0, 18, -0.63281320016026),
    Term::new(0, 24, 1.1385952129658),
    Term::new(0, 28, -0.47811863648625),
    Term::new(0, 40, 8.5208123431544e-3),
    Term::new(1, 0, 0.93747147377932),
    Term::new(1, 2, 3.3593118604916),
    Term::new(1, 6, 3.3809355601454),
    Term::new(1, 12, 0.16844539671904),
    Term::new(1, 18, 0.73875745236695),
    Term::new(1, 24, -0.47128737436186),
    Term::new(1, 28, 0.15020273139707),
    Term::new(1, 40, -2.176411421975e-3),
    Term::new(2, 2, -0.021810755324761),
    Term::new(2, 8, -0.10829784403677),
    Term::new(2, 18, -0.046333324635812),
    Term::new(2, 40, 7.1280351959551e-5),
    Term::new(3, 1, 1.1032831789999e-4),
    Term::new(3, 2, 1.8955248387902e-4),
    Term::new(3, 12, 3.0891541160537e-3),
    Term::new(3, 24, 1.3555504554949e-3),
    Term::new(4, 2, 2.8640237477456e-7),
    Term::new(4, 12, -1.0779857357512e-5),
    Term::new(4, 18, -7.6462712454814e-5),
    Term::new(4, 24, 1.4052392818316e-5),
    Term::new(4, 28, -3.1083814331434e-5),
    Term::new(4, 40, -1.0302738212103e-6),
    Term::new(5, 18, 2.821728163504e-7),
    Term::new(5, 24, 1.2704902271945e-6),
    Term::new(5, 40, 7.3803353468292e-8),
    Term::new(6, 28, -1.1030139238909e-8),
    Term::new(7, 2, -8.1456365207833e-14),
    Term::new(7, 28, -2.5180545682962e-11),
    Term::new(9, 1, -1.7565233969407e-18),
    Term::new(9, 40, 8.6934156344163e-15),
];

/// Backward T(p, h) in sub-region 2c, terms `n (π + 25)^I (η − 1.8)^J`.
pub(super) const TEMPERATURE_PH_2C: [Term; 23] = [
    Term::new(-7, 0, -3_236_839_855_524.2),
    Term::new(-7, 4, 7_326_335_090_218.1),
    Term::new(-6, 0, 358_250_899_454.47),
    Term::new(-6, 2, -583_401_318_515.9),
    Term::new(-5, 0, -10_783_068_217.47),
    Term::new(-5, 2, 20_825_544_563.171),
    Term::new(-2, 0, 610_747.83564516),
    Term::new(-2, 1, 859_777.2253558),
    Term::new(-1, 0, -25_745.72360417),
    Term::new(-1, 2, 31_081.088422714),
    Term::new(0, 0, 1_208.2315865936),
    Term::new(0, 1, 482.19755109255),
    Term::new(1, 4, 3.7966001272486),
    Term::new(1, 8, -10.842984880077),
    Term::new(2, 4, -0.04536417267666),
    Term::new(6, 0, 1.4559115658698e-13),
    Term::new(6, 1, 1.126159740723e-12),
    Term::new(6, 4, -1.7804982240686e-11),
    Term::new(6, 10, 1.2324579690832e-7),
    Term::new(6, 12, -1.1606921130984e-6),
    Term::new(6, 16, 2.7846367088554e-5),
    Term::new(6, 20, -5.9270038474176e-4),
    Term::new(6, 22, 1.2918582991878e-3),
];

/// Backward p(h, s) in sub-region 2a, terms `n (η − 0.5)^I (σ − 1.2)^J`.
pub(super) const PRESSURE_HS_2A: [Term; 29] = [
    Term::new(0, 1, -1.82575361923032e-2),
    Term::new(0, 3, -0.125229548799536),
    Term::new(0, 6, 0.592290437320145),
    Term::new(0, 16, 6.04769706185122),
    Term::new(0, 20, 238.624965444474),
    Term::new(0, 22, -298.639090222922),
    Term::new(1, 0, 0.051225081304075),
    Term::new(1, 1, -0.437266515606486),
    Term::new(1, 2, 0.413336902999504),
    Term::new(1, 3, -5.16468254574773),
    Term::new(1, 5, -5.57014838445711),
    Term::new(1, 6, 12.8555037824478),
    Term::new(1, 10, 11.414410895329),
    Term::new(1, 16, -119.504225652714),
    Term::new(1, 20, -2_847.7798596156),
    Term::new(1, 22, 4_317.57846408006),
    Term::new(2, 3, 1.1289404080265),
    Term::new(2, 16, 1_974.09186206319),
    Term::new(2, 20, 1_516.12444706087),
    Term::new(3, 0, 1.41324451421235e-2),
    Term::new(3, 2, 0.585501282219601),
    Term::new(3, 3, -2.97258075863012),
    Term::new(3, 6, 5.94567314847319),
    Term::new(3, 16, -6_236.56565798905),
    Term::new(4, 16, 9_659.86235133332),
    Term::new(5, 3, 6.81500934948134),
    Term::new(5, 16, -6_332.07286824489),
    Term::new(6, 3, -5.5891922446576),
    Term::new(7, 1, 4.00645798472063e-2),
];

/// Backward p(h, s) in sub-region 2b, terms `n (η − 0.6)^I (σ − 1.01)^J`.
pub(super) const PRESSURE_HS_2B: [Term; 33] = [
    Term::new(0, 0, 8.01496989929495e-2),
    Term::new(0, 1, -0.543862807146111),
    Term::new(0, 2, 0.337455597421283),
    Term::new(0, 4, 8.9055545115745),
    Term::new(0, 8, 313.840736431485),
    Term::new(1, 0, 0.797367065977789),
    Term::new(1, 1, -1.2161697355624),
    Term::new(1, 2, 8.72803386937477),
    Term::new(1, 3, -16.9769781757602),
    Term::new(1, 5, -186.552827328416),
    Term::new(1, 12, 95_115.9274344237),
    Term::new(2, 1, -18.9168510120494),
    Term::new(2, 6, -4_334.0703719484),
    Term::new(2, 18, 543_212_633.012715),
    Term::new(3, 0, 0.144793408386013),
    Term::new(3, 1, 128.024559637516),
    Term::new(3, 7, -67_230.9534071268),
    Term::new(3, 12, 33_697_238.0095287),
    Term::new(4, 1, -586.63419676272),
    Term::new(4, 16, -22_140_322_476.9889),
    Term::new(5, 1, 1_716.06668708389),
    Term::new(5, 12, -570_817_595.806302),
    Term::new(6, 1, -3_121.09693178482),
    Term::new(6, 8, -2_078_413.8463301),
    Term::new(6, 18, 3_056_059_461_577.86),
    Term::new(7, 1, 3_221.57004314333),
    Term::new(7, 16, 326_810_259_797.295),
    Term::new(8, 1, -1_441.04158934487),
    Term::new(8, 3, 410.694867802691),
    Term::new(8, 14, 109_077_066_873.024),
    Term::new(8, 18, -24_796_465_425_889.3),
    Term::new(12, 10, 1_888_019_068.65134),
    Term::new(14, 16, -123_651_009_018_773.0),
];

/// Backward p(h, s) in sub-region 2c, terms `n (η − 0.7)^I (σ − 1.1)^J`.
pub(super) const PRESSURE_HS_2C: [Term; 31] = [
    Term::new(0, 0, 0.112225607199012),
    Term::new(0, 1, -3.39005953606712),
    Term::new(0, 2, -32.0503911730094),
    Term::new(0, 3, -197.5973051049),
    Term::new(0, 4, -407.693861553446),
    Term::new(0, 8, 13_294.3775222331),
    Term::new(1, 0, 1.70846839774007),
    Term::new(1, 2, 37.3694198142245),
    Term::new(1, 5, 3_581.44365815434),
    Term::new(1, 8, 423_014.446424664),
    Term::new(1, 14, -751_071_025.760063),
    Term::new(2, 2, 52.3446127607898),
    Term::new(2, 3, -228.351290812417),
    Term::new(2, 7, -960_652.417056937),
    Term::new(2, 10, -80_705_929.2526074),
    Term::new(2, 18, 1_626_980_172_256.69),
    Term::new(3, 0, 0.772465073604171),
    Term::new(3, 5, 46_392.9973837746),
    Term::new(3, 8, -13_731_788.5134128),
    Term::new(3, 16, 1_704_703_926_305.12),
    Term::new(3, 18, -25_110_462_818_730.8),
    Term::new(4, 18, 31_774_883_083_552.0),
    Term::new(5, 1, 53.8685623675312),
    Term::new(5, 4, -55_308.9094625169),
    Term::new(5, 6, -1_028_615.22421405),
    Term::new(5, 14, 2_042_494_187_562.34),
    Term::new(6, 8, 273_918_446.626977),
    Term::new(6, 18, -2.63963146312685e15),
    Term::new(10, 7, -1_078_908_541.08088),
    Term::new(12, 7, -29_649_262_098.0124),
    Term::new(16, 10, -1.11754907323424e15),
];
