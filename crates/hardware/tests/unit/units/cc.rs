//! Condition code and branch-enable tests.

use lc3bsim_core::core::arch::ConditionCode;
use rstest::rstest;

#[rstest]
#[case(0x0000, ConditionCode::Zero)]
#[case(0x0001, ConditionCode::Positive)]
#[case(0x7FFF, ConditionCode::Positive)]
#[case(0x8000, ConditionCode::Negative)]
#[case(0xFFFF, ConditionCode::Negative)]
fn classifies_values(#[case] value: u16, #[case] want: ConditionCode) {
    assert_eq!(ConditionCode::from_value(value), want);
}

#[test]
fn exactly_one_flag_is_set() {
    for cc in [
        ConditionCode::Negative,
        ConditionCode::Zero,
        ConditionCode::Positive,
    ] {
        let set = [cc.n(), cc.z(), cc.p()].iter().filter(|&&f| f).count();
        assert_eq!(set, 1, "{cc:?}");
    }
}

#[test]
fn branch_enable_is_the_single_matching_term() {
    for cc in [
        ConditionCode::Negative,
        ConditionCode::Zero,
        ConditionCode::Positive,
    ] {
        for nzp in 0u16..8 {
            let ir = nzp << 9;
            let terms = [
                cc.n() && ir & 0x0800 != 0,
                cc.z() && ir & 0x0400 != 0,
                cc.p() && ir & 0x0200 != 0,
            ];
            let active = terms.iter().filter(|&&t| t).count();
            assert!(active <= 1);
            assert_eq!(cc.branch_enable(ir), active == 1, "{cc:?} nzp={nzp:03b}");
        }
    }
}

#[test]
fn reset_value_is_zero() {
    assert_eq!(ConditionCode::default(), ConditionCode::Zero);
}
