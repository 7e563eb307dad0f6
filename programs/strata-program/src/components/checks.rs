use anchor_lang::prelude::*;

use crate::states::GlobalState;
use crate::utils::StrataError;

/// Checks that the given signer is the protocol authority.
/// Returns `Unauthorized` error if not.
pub fn check_authority(state: &GlobalState, signer: &Signer) -> Result<()> {
    if signer.key() != state.authority {
        return Err(StrataError::Unauthorized.into());
    }

    Ok(())
}
