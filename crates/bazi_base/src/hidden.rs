//! Hidden Heavenly Stems (Cang Gan) concealed inside each Earthly Branch.
//!
//! Each branch conceals 1–3 stems, listed primary first. Standard mapping.

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// Hidden stems for a branch, primary stem first.
pub const fn hidden_stems(branch: EarthlyBranch) -> &'static [HeavenlyStem] {
    use EarthlyBranch as B;
    use HeavenlyStem as S;
    match branch {
        B::Zi => &[S::Ren],
        B::Chou => &[S::Ji, S::Gui, S::Xin],
        B::Yin => &[S::Wu, S::Jia, S::Bing],
        B::Mao => &[S::Yi],
        B::Chen => &[S::Wu, S::Yi, S::Gui],
        B::Si => &[S::Geng, S::Bing, S::Wu],
        B::Wu => &[S::Ding, S::Ji],
        B::Wei => &[S::Ji, S::Ding, S::Yi],
        B::Shen => &[S::Wu, S::Geng, S::Ren],
        B::You => &[S::Xin],
        B::Xu => &[S::Xin, S::Ding, S::Wu],
        B::Hai => &[S::Ren, S::Jia],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    #[test]
    fn every_branch_conceals_one_to_three() {
        for b in ALL_BRANCHES {
            let n = hidden_stems(b).len();
            assert!((1..=3).contains(&n), "{}: {}", b.name(), n);
        }
    }

    #[test]
    fn primary_hidden_stem_examples() {
        assert_eq!(hidden_stems(EarthlyBranch::Zi), &[HeavenlyStem::Ren]);
        assert_eq!(hidden_stems(EarthlyBranch::Mao), &[HeavenlyStem::Yi]);
        assert_eq!(hidden_stems(EarthlyBranch::You), &[HeavenlyStem::Xin]);
        assert_eq!(
            hidden_stems(EarthlyBranch::Wu),
            &[HeavenlyStem::Ding, HeavenlyStem::Ji]
        );
    }

    #[test]
    fn cardinal_branches_conceal_single_stem() {
        // Zi, Mao, You hold exactly one stem; Wu is the exception with two.
        assert_eq!(hidden_stems(EarthlyBranch::Zi).len(), 1);
        assert_eq!(hidden_stems(EarthlyBranch::Mao).len(), 1);
        assert_eq!(hidden_stems(EarthlyBranch::You).len(), 1);
        assert_eq!(hidden_stems(EarthlyBranch::Wu).len(), 2);
    }
}
