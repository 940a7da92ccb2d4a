//! Region 3 coefficients (IAPWS-IF97 and its 2003/2004 supplementary releases).

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use crate::support::thermo::model::if97::core::series::Term;

/// Coefficient of the `ln δ` term of φ(δ, τ).
pub(super) const LOG_TERM: f64 = 1.0658070028513;

/// Remaining terms of φ(δ, τ), `n δ^I τ^J`.
pub(super) const HELMHOLTZ: [Term; 39] = [
    Term::new(0, 0, -15.732845290239),
    Term::new(0, 1, 20.944396974307),
    Term::new(0, 2, -7.6867707878716),
    Term::new(0, 7, 2.6185947787954),
    Term::new(0, 10, -2.808078114862),
    Term::new(0, 12, 1.2053369696517),
    Term::new(0, 23, -8.4566812812502e-3),
    Term::new(1, 2, -1.2654315477714),
    Term::new(1, 6, -1.1524407806681),
    Term::new(1, 15, 0.88521043984318),
    Term::new(1, 17, -0.64207765181607),
    Term::new(2, 0, 0.38493460186671),
    Term::new(2, 2, -0.85214708824206),
    Term::new(2, 6, 4.8972281541877),
    Term::new(2, 7, -3.0502617256965),
    Term::new(2, 22, 0.039420536879154),
    Term::new(2, 26, 0.12558408424308),
    Term::new(3, 0, -0.2799932969871),
    Term::new(3, 2, 1.389979956946),
    Term::new(3, 4, -2.018991502357),
    Term::new(3, 16, -8.2147637173963e-3),
    Term::new(3, 26, -0.47596035734923),
    Term::new(4, 0, 0.0439840744735),
    Term::new(4, 2, -0.44476435428739),
    Term::new(4, 4, 0.90572070719733),
    Term::new(4, 26, 0.70522450087967),
    Term::new(5, 1, 0.10770512626332),
    Term::new(5, 3, -0.32913623258954),
    Term::new(5, 26, -0.50871062041158),
    Term::new(6, 0, -0.022175400873096),
    Term::new(6, 2, 0.094260751665092),
    Term::new(6, 26, 0.16436278447961),
    Term::new(7, 2, -0.013503372241348),
    Term::new(8, 26, -0.014834345352472),
    Term::new(9, 2, 5.7922953628084e-4),
    Term::new(9, 26, 3.2308904703711e-3),
    Term::new(10, 0, 8.0964802996215e-5),
    Term::new(10, 1, -1.6557679795037e-4),
    Term::new(11, 26, -4.4923899061815e-5),
];

/// Backward T(p, h) in sub-region 3a, terms `n (π + 0.240)^I (η − 0.615)^J`.
pub(super) const TEMPERATURE_PH_3A: [Term; 31] = [
    Term::new(-12, 0, -1.33645667811215e-7),
    Term::new(-12, 1, 4.55912656802978e-6),
    Term::new(-12, 2, -1.46294640700979e-5),
    Term::new(-12, 6, 6.3934131297008e-3),
    Term::new(-12, 14, 372.783927268847),
    Term::new(-12, 16, -7_186.54377460447),
    Term::new(-12, 20, 573_494.7521034),
    Term::new(-12, 22, -2_675_693.29111439),
    Term::new(-10, 1, -3.34066283302614e-5),
    Term::new(-10, 5, -2.45479214069597e-2),
    Term::new(-10, 12, 47.8087847764996),
    Term::new(-8, 0, 7.64664131818904e-6),
    Term::new(-8, 2, 1.28350627676972e-3),
    Term::new(-8, 4, 1.71219081377331e-2),
    Term::new(-8, 10, -8.51007304583213),
    Term::new(-5, 2, -1.36513461629781e-2),
    Term::new(-3, 0, -3.84460997596657e-6),
    Term::new(-2, 1, 3.37423807911655e-3),
    Term::new(-2, 3, -0.551624873066791),
    Term::new(-2, 4, 0.72920227710747),
    Term::new(-1, 0, -9.92522757376041e-3),
    Term::new(-1, 2, -0.119308831407288),
    Term::new(0, 0, 0.793929190615421),
    Term::new(0, 1, 0.454270731799386),
    Term::new(1, 1, 0.20999859125991),
    Term::new(3, 0, -6.42109823904738e-3),
    Term::new(3, 1, -0.023515586860454),
    Term::new(4, 0, 2.52233108341612e-3),
    Term::new(4, 3, -7.64885133368119e-3),
    Term::new(10, 4, 1.36176427574291e-2),
    Term::new(12, 5, -1.33027883575669e-2),
];

/// Backward T(p, h) in sub-region 3b, terms `n (π + 0.298)^I (η − 0.720)^J`.
pub(super) const TEMPERATURE_PH_3B: [Term; 33] = [
    Term::new(-12, 0, 3.2325457364492e-5),
    Term::new(-12, 1, -1.27575556587181e-4),
    Term::new(-10, 0, -4.75851877356068e-4),
    Term::new(-10, 1, 1.56183014181602e-3),
    Term::new(-10, 5, 0.105724860113781),
    Term::new(-10, 10, -85.8514221132534),
    Term::new(-10, 12, 724.140095480911),
    Term::new(-8, 0, 2.96475810273257e-3),
    Term::new(-8, 1, -5.92721983365988e-3),
    Term::new(-8, 2, -1.26305422818666e-2),
    Term::new(-8, 4, -0.115716196364853),
    Term::new(-8, 10, 84.9000969739595),
    Term::new(-6, 0, -1.08602260086615e-2),
    Term::new(-6, 1, 1.54304475328851e-2),
    Term::new(-6, 2, 7.50455441524466e-2),
    Term::new(-4, 0, 2.52520973612982e-2),
    Term::new(-4, 1, -6.02507901232996e-2),
    Term::new(-3, 5, -3.07622221350501),
    Term::new(-2, 0, -5.74011959864879e-2),
    Term::new(-2, 4, 5.03471360939849),
    Term::new(-1, 2, -0.925081888584834),
    Term::new(-1, 4, 3.91733882917546),
    Term::new(-1, 6, -77.314600713019),
    Term::new(-1, 10, 9_493.08762098587),
    Term::new(-1, 14, -1_410_437.19679409),
    Term::new(-1, 16, 8_491_662.30819026),
    Term::new(0, 0, 0.861095729446704),
    Term::new(0, 2, 0.32334644281172),
    Term::new(1, 1, 0.873281936020439),
    Term::new(3, 1, -0.436653048526683),
    Term::new(5, 1, 0.286596714529479),
    Term::new(6, 1, -0.131778331276228),
    Term::new(8, 1, 6.76682064330275e-3),
];

/// Backward v(p, h) in sub-region 3a, terms `n (π + 0.128)^I (η − 0.727)^J`.
pub(super) const VOLUME_PH_3A: [Term; 32] = [
    Term::new(-12, 6, 5.29944062966028e-3),
    Term::new(-12, 8, -0.170099690234461),
    Term::new(-12, 12, 11.1323814312927),
    Term::new(-12, 18, -2_178.98123145125),
    Term::new(-10, 4, -5.06061827980875e-4),
    Term::new(-10, 7, 0.556495239685324),
    Term::new(-10, 10, -9.43672726094016),
    Term::new(-8, 5, -0.297856807561527),
    Term::new(-8, 12, 93.9353943717186),
    Term::new(-6, 3, 1.92944939465981e-2),
    Term::new(-6, 4, 0.421740664704763),
    Term::new(-6, 22, -3_689_141.2628233),
    Term::new(-4, 2, -7.37566847600639e-3),
    Term::new(-4, 3, -0.354753242424366),
    Term::new(-3, 7, -1.99768169338727),
    Term::new(-2, 3, 1.15456297059049),
    Term::new(-2, 16, 5_683.6687581596),
    Term::new(-1, 0, 8.08169540124668e-3),
    Term::new(-1, 1, 0.172416341519307),
    Term::new(-1, 2, 1.04270175292927),
    Term::new(-1, 3, -0.297691372792847),
    Term::new(0, 0, 0.560394465163593),
    Term::new(0, 1, 0.275234661176914),
    Term::new(1, 0, -0.148347894866012),
    Term::new(1, 1, -6.51142513478515e-2),
    Term::new(1, 2, -2.92468715386302),
    Term::new(2, 0, 6.64876096952665e-2),
    Term::new(2, 2, 3.52335014263844),
    Term::new(3, 0, -1.46340792313332e-2),
    Term::new(4, 2, -2.24503486668184),
    Term::new(5, 2, 1.10533464706142),
    Term::new(8, 2, -4.08757344495612e-2),
];

/// Backward v(p, h) in sub-region 3b, terms `n (π + 0.0661)^I (η − 0.720)^J`.
pub(super) const VOLUME_PH_3B: [Term; 30] = [
    Term::new(-12, 0, -2.25196934336318e-9),
    Term::new(-12, 1, 1.40674363313486e-8),
    Term::new(-8, 0, 2.3378408528056e-6),
    Term::new(-8, 1, -3.31833715229001e-5),
    Term::new(-8, 3, 1.07956778514318e-3),
    Term::new(-8, 6, -0.271382067378863),
    Term::new(-8, 7, 1.07202262490333),
    Term::new(-8, 8, -0.853821329075382),
    Term::new(-6, 0, -2.15214194340526e-5),
    Term::new(-6, 1, 7.6965608822273e-4),
    Term::new(-6, 2, -4.31136580433864e-3),
    Term::new(-6, 5, 0.453342167309331),
    Term::new(-6, 6, -0.507749535873652),
    Term::new(-6, 10, -100.475154528389),
    Term::new(-4, 3, -0.219201924648793),
    Term::new(-4, 6, -3.21087965668917),
    Term::new(-4, 10, 607.567815637771),
    Term::new(-3, 0, 5.57686450685932e-4),
    Term::new(-3, 2, 0.18749904002955),
    Term::new(-2, 1, 9.05368030448107e-3),
    Term::new(-2, 2, 0.285417173048685),
    Term::new(-1, 0, 3.29924030996098e-2),
    Term::new(-1, 1, 0.239897419685483),
    Term::new(-1, 4, 4.82754995951394),
    Term::new(-1, 5, -11.8035753702231),
    Term::new(0, 0, 0.169490044091791),
    Term::new(1, 0, -1.79967222507787e-2),
    Term::new(1, 1, 3.71810116332674e-2),
    Term::new(2, 2, -5.36288335065096e-2),
    Term::new(2, 6, 1.6069710109252),
];

/// Backward p(h, s) in sub-region 3a, terms `n (η − 1.01)^I (σ − 0.750)^J`.
pub(super) const PRESSURE_HS_3A: [Term; 33] = [
    Term::new(0, 0, 7.70889828326934),
    Term::new(0, 1, -26.0835009128688),
    Term::new(0, 5, 267.416218930389),
    Term::new(1, 0, 17.2221089496844),
    Term::new(1, 3, -293.54233214597),
    Term::new(1, 4, 614.135601882478),
    Term::new(1, 8, -61_056.2757725674),
    Term::new(1, 14, -65_127_225.1118219),
    Term::new(2, 6, 73_591.9313521937),
    Term::new(2, 16, -11_664_650_591.4191),
    Term::new(3, 0, 35.5267086434461),
    Term::new(3, 2, -596.144543825955),
    Term::new(3, 3, -475.842430145708),
    Term::new(4, 0, 69.6781965359503),
    Term::new(4, 1, 335.674250377312),
    Term::new(4, 4, 25_052.6809130882),
    Term::new(4, 5, 146_997.380630766),
    Term::new(5, 28, 5.38069315091534e19),
    Term::new(6, 28, 1.43619827291346e21),
    Term::new(7, 24, 3.64985866165994e19),
    Term::new(8, 1, -2_547.41561156775),
    Term::new(10, 32, 2.40120197096563e27),
    Term::new(10, 36, -3.93847464679496e29),
    Term::new(14, 22, 1.47073407024852e24),
    Term::new(18, 28, -4.26391250432059e31),
    Term::new(20, 36, 1.94509340621077e38),
    Term::new(22, 16, 6.66212132114896e23),
    Term::new(22, 28, 7.06777016552858e33),
    Term::new(24, 36, 1.75563621975576e41),
    Term::new(28, 16, 1.08408607429124e28),
    Term::new(28, 36, 7.30872705175151e43),
    Term::new(32, 10, 1.5914584739887e24),
    Term::new(32, 28, 3.77121605943324e40),
];

/// Backward p(h, s) in sub-region 3b, terms `n (η − 0.681)^I (σ − 0.792)^J`.
pub(super) const PRESSURE_HS_3B: [Term; 35] = [
    Term::new(-12, 2, 1.25244360717979e-13),
    Term::new(-12, 10, -1.26599322553713e-2),
    Term::new(-12, 12, 5.06878030140626),
    Term::new(-12, 14, 31.7847171154202),
    Term::new(-12, 20, -391_041.161399932),
    Term::new(-10, 2, -9.75733406392044e-11),
    Term::new(-10, 10, -18.6312419488279),
    Term::new(-10, 14, 510.973543414101),
    Term::new(-10, 18, 373_847.005822362),
    Term::new(-8, 2, 2.99804024666572e-8),
    Term::new(-8, 8, 20.0544393820342),
    Term::new(-6, 2, -4.98030487662829e-6),
    Term::new(-6, 6, -10.230180636003),
    Term::new(-6, 7, 55.2819126990325),
    Term::new(-6, 8, -206.211367510878),
    Term::new(-5, 10, -7_940.12232324823),
    Term::new(-4, 4, 7.82248472028153),
    Term::new(-4, 5, -58.6544326902468),
    Term::new(-4, 8, 3_550.73647696481),
    Term::new(-3, 1, -1.15303107290162e-4),
    Term::new(-3, 3, -1.75092403171802),
    Term::new(-3, 5, 257.98168774816),
    Term::new(-3, 6, -727.048374179467),
    Term::new(-2, 0, 1.21644822609198e-4),
    Term::new(-2, 1, 3.93137871762692e-2),
    Term::new(-1, 0, 7.04181005909296e-3),
    Term::new(0, 3, -82.910820069811),
    Term::new(2, 0, -0.26517881813125),
    Term::new(2, 1, 13.7531682453991),
    Term::new(5, 0, -52.2394090753046),
    Term::new(6, 1, 2_405.56298941048),
    Term::new(8, 1, -22_736.1631268929),
    Term::new(10, 1, 89_074.6343932567),
    Term::new(14, 3, -23_923_456.5822486),
    Term::new(14, 7, 5_687_958_081.29714),
];
