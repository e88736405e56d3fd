//! Rational approximation coefficients for erf/erfc.
//!
//! Source: SunPro/FreeBSD `s_erf.c` (Copyright (C) 1993 by Sun Microsystems,
//! Inc. Permission to use, copy, modify, and distribute this software is
//! freely granted, provided that this notice is preserved).
//!
//! Each rational approximation is written `C + t·P(t)` where `C` is the
//! constant term kept apart from the table and `P` is evaluated with
//! [`eval_poly`](crate::algorithm::polynomial::eval_poly) over the table in
//! ascending order. The hex words are the IEEE-754 high/low words of each
//! constant.

#![allow(clippy::excessive_precision)]

// ============================================================================
// Regime boundaries and shared constants
// ============================================================================

/// Upper bound of the near-zero regime: erf(x) ≈ x + x·R(x²)
pub const NEAR_ZERO_BOUND: f64 = 0.84375;

/// Upper bound of the Taylor-at-one regime
pub const NEAR_ONE_BOUND: f64 = 1.25;

/// 1/0.35, split point between the two asymptotic tables
pub const ASYMPTOTIC_SPLIT: f64 = 2.857_142_857_142_857;

/// erfc underflows to `tiny*tiny` at and beyond this bound
pub const ERFC_SATURATION: f64 = 28.0;

/// erf saturates to ±(1 - tiny) at and beyond this bound
pub const ERF_SATURATION: f64 = 6.0;

/// Below -6 erfc is `2 - tiny`
pub const ERFC_NEGATIVE_SATURATION: f64 = -6.0;

/// 2⁻⁵⁶: below this |x|, erfc(x) rounds to `1 - x`
pub const ERFC_SMALL: f64 = 1.387_778_780_781_445_7e-17;

/// 2⁻²⁸: below this |x|, erf(x) rounds to `x + efx·x`
pub const ERF_SMALL: f64 = 3.725_290_298_461_914e-9;

/// 2⁻¹⁰¹⁵: below this |x|, erf scales by 8 before adding efx·x
pub const ERF_UNDERFLOW: f64 = 2.848_094_538_889_218e-306; // 0x00800000, 0x00000000

/// Value used to force inexact results at the saturation points
pub const TINY: f64 = 1e-300;

/// erf(1) rounded to single precision (24 bits)
pub const ERX: f64 = 8.450_629_115_104_675_292_97e-1; // 0x3FEB0AC1, 0x60000000

/// 2/√π − 1
pub const EFX: f64 = 1.283_791_670_955_125_863_16e-1; // 0x3FC06EBA, 0x8214DB69

/// 8·EFX
pub const EFX8: f64 = 1.027_033_336_764_100_690_53; // 0x3FF06EBA, 0x8214DB69

// ============================================================================
// erf on [0, 0.84375)
// ============================================================================

/// Numerator constant term
pub const PPC: f64 = 1.283_791_670_955_125_585_61e-1; // 0x3FC06EBA, 0x8214DB68

/// Numerator coefficients in z = x²
pub const PP: [f64; 4] = [
    -3.250_421_072_470_014_993_70e-1, // 0xBFD4CD7D, 0x691CB913
    -2.848_174_957_559_851_047_66e-2, // 0xBF9D2A51, 0xDBD7194F
    -5.770_270_296_489_441_591_57e-3, // 0xBF77A291, 0x236668E4
    -2.376_301_665_665_016_260_84e-5, // 0xBEF8EAD6, 0x120016AC
];

/// Denominator constant term
pub const QQC: f64 = 1.0;

/// Denominator coefficients in z = x²
pub const QQ: [f64; 5] = [
    3.979_172_239_591_553_528_19e-1,  // 0x3FD97779, 0xCDDADC09
    6.502_224_998_876_729_444_85e-2,  // 0x3FB0A54C, 0x5536CEBA
    5.081_306_281_875_765_627_76e-3,  // 0x3F74D022, 0xC4D36B0F
    1.324_947_380_043_216_445_26e-4,  // 0x3F215DC9, 0x221C1A10
    -3.960_228_278_775_368_123_20e-6, // 0xBED09C43, 0x42A26120
];

// ============================================================================
// erf on [0.84375, 1.25)
// ============================================================================

/// Numerator constant term
pub const PAC: f64 = -2.362_118_560_752_659_440_77e-3; // 0xBF6359B8, 0xBEF77538

/// Numerator coefficients in s = |x| − 1
pub const PA: [f64; 6] = [
    4.148_561_186_837_483_316_66e-1,  // 0x3FDA8D00, 0xAD92B34D
    -3.722_078_760_357_013_238_47e-1, // 0xBFD7D240, 0xFBB8C3F1
    3.183_466_199_011_617_536_74e-1,  // 0x3FD45FCA, 0x805120E4
    -1.108_946_942_823_966_774_76e-1, // 0xBFBC6398, 0x3D3E28EC
    3.547_830_432_561_823_593_71e-2,  // 0x3FA22A36, 0x599795EB
    -2.166_375_594_868_790_843_00e-3, // 0xBF61BF38, 0x0A96073F
];

/// Denominator constant term
pub const QAC: f64 = 1.0;

/// Denominator coefficients in s = |x| − 1
pub const QA: [f64; 6] = [
    1.064_208_804_008_442_282_86e-1, // 0x3FBB3E66, 0x18EEE323
    5.403_979_177_021_710_489_37e-1, // 0x3FE14AF0, 0x92EB6F33
    7.182_865_441_419_626_628_68e-2, // 0x3FB2635C, 0xD99FE9A7
    1.261_712_198_087_616_421_12e-1, // 0x3FC02660, 0xE763351F
    1.363_708_391_202_905_073_62e-2, // 0x3F8BEDC2, 0x6B51DD1C
    1.198_449_984_679_910_741_70e-2, // 0x3F888B54, 0x5735151D
];

// ============================================================================
// erfc on [1.25, 1/0.35)
// ============================================================================

/// Numerator constant term
pub const RAC: f64 = -9.864_944_034_847_148_227_05e-3; // 0xBF843412, 0x600D6435

/// Numerator coefficients in s = 1/x²
pub const RA: [f64; 7] = [
    -6.938_585_727_071_817_643_72e-1, // 0xBFE63416, 0xE4BA7360
    -1.055_862_622_532_329_098_14e1,  // 0xC0251E04, 0x41B0E726
    -6.237_533_245_032_600_603_96e1,  // 0xC04F300A, 0xE4CBA38D
    -1.623_966_694_625_734_703_55e2,  // 0xC0644CB1, 0x84282266
    -1.846_050_929_067_110_359_94e2,  // 0xC067135C, 0xEBCCABB2
    -8.128_743_550_630_659_342_46e1,  // 0xC0545265, 0x57E4D2F2
    -9.814_329_344_169_145_485_92,    // 0xC023A0EF, 0xC69AC25C
];

/// Denominator constant term
pub const SAC: f64 = 1.0;

/// Denominator coefficients in s = 1/x²
pub const SA: [f64; 8] = [
    1.965_127_166_743_925_712_92e1,   // 0x4033A6B9, 0xBD707687
    1.376_577_541_435_190_426_00e2,   // 0x4061350C, 0x526AE721
    4.345_658_774_752_292_288_21e2,   // 0x407B290D, 0xD58A1A71
    6.453_872_717_332_678_803_36e2,   // 0x40842B19, 0x21EC2868
    4.290_081_400_275_678_333_86e2,   // 0x407AD021, 0x57700314
    1.086_350_055_417_794_351_34e2,   // 0x405B28A3, 0xEE48AE2C
    6.570_249_770_319_281_701_35,     // 0x401A47EF, 0x8E484A93
    -6.042_441_521_485_809_874_38e-2, // 0xBFAEEFF2, 0xEE749A62
];

// ============================================================================
// erfc on [1/0.35, 28)
// ============================================================================

/// Numerator constant term
pub const RBC: f64 = -9.864_942_924_700_099_285_97e-3; // 0xBF843412, 0x39E86F4A

/// Numerator coefficients in s = 1/x²
pub const RB: [f64; 6] = [
    -7.992_832_376_805_230_065_74e-1, // 0xBFE993BA, 0x70C285DE
    -1.775_795_491_775_475_198_89e1,  // 0xC031C209, 0x555F995A
    -1.606_363_848_558_219_160_62e2,  // 0xC064145D, 0x43C5ED98
    -6.375_664_433_683_896_277_22e2,  // 0xC083EC88, 0x1375F228
    -1.025_095_131_611_077_249_54e3,  // 0xC0900461, 0x6A2E5992
    -4.835_191_916_086_513_970_19e2,  // 0xC07E384E, 0x9BDC383F
];

/// Denominator constant term
pub const SBC: f64 = 1.0;

/// Denominator coefficients in s = 1/x²
pub const SB: [f64; 7] = [
    3.033_806_074_348_245_829_24e1,  // 0x403E568B, 0x261D5190
    3.257_925_129_965_739_188_26e2,  // 0x40745CAE, 0x221B9F0A
    1.536_729_586_084_436_959_94e3,  // 0x409802EB, 0x189D5118
    3.199_858_219_508_595_539_08e3,  // 0x40A8FFB7, 0x688C246A
    2.553_050_406_433_164_425_83e3,  // 0x40A3F219, 0xCEDF3BE6
    4.745_285_412_069_553_672_15e2,  // 0x407DA874, 0xE79FE763
    -2.244_095_244_658_581_833_62e1, // 0xC03670E2, 0x42712D62
];
