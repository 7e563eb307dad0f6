use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::{get_stack_height, TRANSACTION_LEVEL_STACK_HEIGHT},
    pubkey,
    sysvar::instructions::{load_current_index_checked, load_instruction_at_checked},
};

use crate::utils::StrataError;

const COMPUTE_BUDGET_ID: Pubkey = pubkey!("ComputeBudget111111111111111111111111111111");

/// Rejects any invocation that is not the top-level entry of its
/// transaction, so no downstream callee can observe intermediate
/// balance-sheet state:
/// - the instruction at the current index must be executed by this
///   program (otherwise we are inside a CPI),
/// - the stack height must be the transaction level,
/// - every preceding instruction must be a compute-budget instruction
///   (those never invoke this program).
pub fn check_execution_ctx(instruction_sysvar: &AccountInfo) -> Result<()> {
    let current_index: usize = load_current_index_checked(instruction_sysvar)?.into();

    let current_ix = load_instruction_at_checked(current_index, instruction_sysvar)?;
    if crate::ID != current_ix.program_id {
        return Err(StrataError::InvalidCPIContext.into());
    }

    if get_stack_height() > TRANSACTION_LEVEL_STACK_HEIGHT {
        return Err(StrataError::InvalidCPIContext.into());
    }

    for ixn in 0..current_index {
        let ix = load_instruction_at_checked(ixn, instruction_sysvar)?;
        if ix.program_id != COMPUTE_BUDGET_ID {
            return Err(StrataError::InvalidCPIContext.into());
        }
    }

    Ok(())
}
