//! Normalization of raw Bybit wallet-balance payloads.

use crate::exchange::types::{
    AccountSummary, AssetBalance, BalanceReport, UnifiedAccount, WalletBalanceResult,
};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse one of the exchange's numeric strings, defaulting missing or
/// unparseable values to zero.
fn parse_or_zero(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap_or(Decimal::ZERO)
}

/// Flatten a raw wallet-balance payload into a [`BalanceReport`].
///
/// Coins with a zero wallet balance are dropped, and the USD total is
/// recomputed from the coins that remain rather than copied from the
/// exchange aggregate (which may include filtered coins or round
/// differently). An empty account list yields an all-zero report.
pub fn normalize(raw: &WalletBalanceResult) -> BalanceReport {
    let Some(account) = raw.list.first() else {
        return BalanceReport::default();
    };

    let mut total_usd = Decimal::ZERO;
    let mut assets = Vec::new();

    for entry in &account.coin {
        let wallet_balance = parse_or_zero(&entry.wallet_balance);
        if wallet_balance <= Decimal::ZERO {
            continue;
        }

        let usd_value = parse_or_zero(&entry.usd_value);
        total_usd += usd_value;

        assets.push(AssetBalance {
            coin: entry.coin.clone(),
            wallet_balance,
            usd_value,
            equity: parse_or_zero(&entry.equity),
            unrealized_pnl: parse_or_zero(&entry.unrealised_pnl),
            available_to_withdraw: parse_or_zero(&entry.available_to_withdraw),
        });
    }

    BalanceReport {
        total_usd,
        assets,
        account_info: account_summary(account),
    }
}

fn account_summary(account: &UnifiedAccount) -> AccountSummary {
    AccountSummary {
        total_margin_balance: parse_or_zero(&account.total_margin_balance),
        total_available_balance: parse_or_zero(&account.total_available_balance),
        total_wallet_balance: parse_or_zero(&account.total_wallet_balance),
        total_equity: parse_or_zero(&account.total_equity),
        total_perp_upl: parse_or_zero(&account.total_perp_upl),
        total_initial_margin: parse_or_zero(&account.total_initial_margin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::types::RawCoinBalance;
    use rust_decimal_macros::dec;

    fn coin(name: &str, wallet_balance: &str, usd_value: &str) -> RawCoinBalance {
        RawCoinBalance {
            coin: name.to_string(),
            wallet_balance: wallet_balance.to_string(),
            usd_value: usd_value.to_string(),
            ..RawCoinBalance::default()
        }
    }

    #[test]
    fn zero_balance_coins_are_filtered_out() {
        let raw = WalletBalanceResult {
            list: vec![UnifiedAccount {
                coin: vec![
                    coin("BTC", "0", "0"),
                    coin("ETH", "0.00000000", "0"),
                    coin("USDT", "250.5", "250.5"),
                ],
                ..UnifiedAccount::default()
            }],
        };

        let report = normalize(&raw);
        assert_eq!(report.assets.len(), 1);
        assert_eq!(report.assets[0].coin, "USDT");
        assert_eq!(report.assets[0].wallet_balance, dec!(250.5));
    }

    #[test]
    fn total_usd_is_recomputed_from_included_assets() {
        let raw = WalletBalanceResult {
            list: vec![UnifiedAccount {
                // Exchange aggregate deliberately disagrees with the coin sum
                total_equity: "9999".to_string(),
                coin: vec![
                    coin("USDT", "100", "100.25"),
                    coin("BTC", "0.5", "30000.75"),
                    coin("DUST", "0", "5"),
                ],
                ..UnifiedAccount::default()
            }],
        };

        let report = normalize(&raw);
        let summed: Decimal = report.assets.iter().map(|a| a.usd_value).sum();
        assert_eq!(report.total_usd, summed);
        assert_eq!(report.total_usd, dec!(30101.00));
    }

    #[test]
    fn missing_and_garbage_fields_default_to_zero() {
        let raw = WalletBalanceResult {
            list: vec![UnifiedAccount {
                total_equity: "not-a-number".to_string(),
                coin: vec![RawCoinBalance {
                    coin: "USDC".to_string(),
                    wallet_balance: "10".to_string(),
                    usd_value: String::new(),
                    equity: "??".to_string(),
                    ..RawCoinBalance::default()
                }],
                ..UnifiedAccount::default()
            }],
        };

        let report = normalize(&raw);
        assert_eq!(report.assets[0].usd_value, Decimal::ZERO);
        assert_eq!(report.assets[0].equity, Decimal::ZERO);
        assert_eq!(report.assets[0].unrealized_pnl, Decimal::ZERO);
        assert_eq!(report.account_info.total_equity, Decimal::ZERO);
    }

    #[test]
    fn account_aggregates_are_passed_through() {
        let raw = WalletBalanceResult {
            list: vec![UnifiedAccount {
                total_equity: "100.5".to_string(),
                total_wallet_balance: "98".to_string(),
                total_margin_balance: "99".to_string(),
                total_available_balance: "97".to_string(),
                total_perp_upl: "-1.5".to_string(),
                total_initial_margin: "2".to_string(),
                coin: vec![],
            }],
        };

        let info = normalize(&raw).account_info;
        assert_eq!(info.total_equity, dec!(100.5));
        assert_eq!(info.total_wallet_balance, dec!(98));
        assert_eq!(info.total_margin_balance, dec!(99));
        assert_eq!(info.total_available_balance, dec!(97));
        assert_eq!(info.total_perp_upl, dec!(-1.5));
        assert_eq!(info.total_initial_margin, dec!(2));
    }

    #[test]
    fn empty_account_list_yields_zero_report() {
        let report = normalize(&WalletBalanceResult { list: vec![] });
        assert_eq!(report, BalanceReport::default());
        assert!(report.assets.is_empty());
        assert_eq!(report.total_usd, Decimal::ZERO);
    }

    #[test]
    fn negative_wallet_balance_is_excluded() {
        let raw = WalletBalanceResult {
            list: vec![UnifiedAccount {
                coin: vec![coin("USDT", "-5", "-5"), coin("BTC", "1", "60000")],
                ..UnifiedAccount::default()
            }],
        };

        let report = normalize(&raw);
        assert_eq!(report.assets.len(), 1);
        assert_eq!(report.assets[0].coin, "BTC");
    }
}
