//! Default-wallet selection.

use api_types::wallet::WalletView;
use uuid::Uuid;

use crate::amount;

/// Picks the wallet a new transaction should target by default.
///
/// Preference order:
/// 1. the wallet flagged primary, if any (at most one should carry the flag;
///    zero is tolerated);
/// 2. the wallet with the numerically largest balance in the reference
///    currency, first one wins on ties.
///
/// Wallets whose reference balance is absent or unparsable never beat a
/// wallet with a known balance; if no wallet has one, the first wallet wins.
#[must_use]
pub fn pick_default_wallet(wallets: &[WalletView]) -> Option<Uuid> {
    if let Some(primary) = wallets.iter().find(|wallet| wallet.is_primary) {
        return Some(primary.id);
    }

    let mut best: Option<(Uuid, f64)> = None;
    for wallet in wallets {
        let value = wallet
            .balance_in_reference_currency
            .as_deref()
            .and_then(amount::parse)
            .unwrap_or(f64::NEG_INFINITY);
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((wallet.id, value));
        }
    }
    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use api_types::{CurrencyCode, wallet::WalletKind};

    use super::*;

    fn wallet(name: &str, reference_balance: Option<&str>, is_primary: bool) -> WalletView {
        WalletView {
            id: Uuid::new_v4(),
            owner_id: "u-1".to_string(),
            name: name.to_string(),
            kind: WalletKind::Card,
            balance: "0".to_string(),
            currency: CurrencyCode::new("IDR"),
            balance_in_reference_currency: reference_balance.map(|s| s.to_string()),
            is_primary,
        }
    }

    #[test]
    fn empty_list_has_no_default() {
        assert_eq!(pick_default_wallet(&[]), None);
    }

    #[test]
    fn primary_beats_larger_balance() {
        let wallets = vec![
            wallet("big", Some("500"), false),
            wallet("flagged", Some("100"), true),
        ];
        assert_eq!(pick_default_wallet(&wallets), Some(wallets[1].id));
    }

    #[test]
    fn largest_reference_balance_wins_without_primary() {
        let wallets = vec![
            wallet("a", Some("100"), false),
            wallet("b", Some("500"), false),
            wallet("c", Some("200"), false),
        ];
        assert_eq!(pick_default_wallet(&wallets), Some(wallets[1].id));
    }

    #[test]
    fn first_max_wins_on_ties() {
        let wallets = vec![
            wallet("a", Some("500"), false),
            wallet("b", Some("500"), false),
        ];
        assert_eq!(pick_default_wallet(&wallets), Some(wallets[0].id));
    }

    #[test]
    fn unparsable_balances_lose_to_known_ones() {
        let wallets = vec![
            wallet("a", None, false),
            wallet("b", Some("not-a-number"), false),
            wallet("c", Some("-3"), false),
        ];
        assert_eq!(pick_default_wallet(&wallets), Some(wallets[2].id));
    }

    #[test]
    fn all_unknown_falls_back_to_first() {
        let wallets = vec![wallet("a", None, false), wallet("b", None, false)];
        assert_eq!(pick_default_wallet(&wallets), Some(wallets[0].id));
    }
}
