use anchor_lang::error_code;

#[error_code]
pub enum StrataError {
    #[msg("Signer is not the protocol authority")]
    Unauthorized,

    #[msg("Instruction must be invoked top-level, not through CPI")]
    InvalidCPIContext,

    #[msg("Minting is paused")]
    MintPaused,

    #[msg("Redeeming is paused")]
    RedeemPaused,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Amount below the dust floor")]
    AmountTooSmall,

    #[msg("Output below the requested minimum")]
    SlippageExceeded,

    #[msg("User LST balance too low")]
    InsufficientCollateral,

    #[msg("User token balance too low")]
    InsufficientSupply,

    #[msg("Operation would leave the collateral ratio below the floor")]
    CollateralRatioTooLow,

    #[msg("Protocol equity is exhausted")]
    InsolventProtocol,

    #[msg("Operation would leave a dust-level TVL in the vault")]
    BelowMinimumTVL,

    #[msg("Oracle price snapshot is stale")]
    OraclePriceStale,

    #[msg("Oracle confidence interval too wide")]
    OracleConfidenceTooWide,

    #[msg("LST exchange-rate cache is stale")]
    LstRateStale,

    #[msg("Parameter out of bounds")]
    InvalidParameter,

    #[msg("Global state already initialized")]
    AlreadyInitialized,

    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Division by zero")]
    DivisionByZero,

    #[msg("Post-operation invariant violated")]
    InvariantViolation,
}
