// Path: crates/client/src/abi.rs
//! Solidity interface of the HLINK token, as consumed by this client.

use alloy_sol_types::sol;
use hlink_types::app::UserParams as DomainUserParams;

sol! {
    /// One element of the `batchSetUser` argument.
    #[derive(Debug, PartialEq, Eq)]
    struct UserParams {
        uint8 lockType;
        uint256 period;
        uint256 mintAmount;
        address user;
    }

    /// The record returned by `getUserInfo`.
    #[derive(Debug, PartialEq, Eq)]
    struct UserInfo {
        bool whitelist;
        uint8 lockType;
        uint256 startTime;
        uint256 lastWithdrawTime;
        uint256 endTime;
        uint256 alreadyMint;
        uint256 totalMint;
    }

    /// The externally visible functions this client calls.
    interface IHLink {
        function totalSupply() external view returns (uint256 supply);
        function lockState() external view returns (bool locked);
        function mint(address receiver, uint256 amount) external;
        function setLock(bool state) external;
        function setUserLock(address user, bool state) external;
        function batchSetUser(UserParams[] calldata paramsGroup) external;
        function getUserInfo(address user) external view returns (UserInfo memory info);
        function getUserReleaseAmount(address user) external view returns (uint256 amount);
        function release() external;
    }
}

impl From<&DomainUserParams> for UserParams {
    fn from(p: &DomainUserParams) -> Self {
        Self {
            lockType: p.lock_type.as_u8(),
            period: alloy_primitives::U256::from(p.period_secs),
            mintAmount: p.mint_amount,
            user: p.user,
        }
    }
}

impl From<UserInfo> for hlink_types::app::UserInfo {
    fn from(raw: UserInfo) -> Self {
        Self::from_raw(
            raw.whitelist,
            raw.lockType,
            raw.startTime,
            raw.lastWithdrawTime,
            raw.endTime,
            raw.alreadyMint,
            raw.totalMint,
        )
    }
}
