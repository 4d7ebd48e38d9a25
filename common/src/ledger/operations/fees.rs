// Ledger Fee Gate
// Payment validation and forwarding for the issuance path.
//
// The gate checks the payment against the configured platform fee before
// any state is touched, and forwards the entire received payment to the
// fee recipient as the last observable side effect of an issuance.
// Overpayment is not refunded; the surplus goes to the recipient.

use log::trace;

use crate::address::Amount;
use crate::ledger::engine::{PaymentChannel, PayoutOutcome};
use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::platform::PlatformConfig;

/// Reject a payment below the configured platform fee
pub fn check_payment(config: &PlatformConfig, payment: Amount) -> LedgerResult<()> {
    if payment < config.platform_fee() {
        return Err(LedgerError::InsufficientPayment);
    }
    Ok(())
}

/// Forward the full payment to the configured fee recipient
///
/// Fails with PayoutFailed when the recipient rejects the funds, which
/// must abort the enclosing issuance.
pub fn forward_payment<P: PaymentChannel + ?Sized>(
    funds: &mut P,
    config: &PlatformConfig,
    payment: Amount,
) -> LedgerResult<()> {
    match funds.forward(config.fee_recipient(), payment) {
        PayoutOutcome::Accepted => {
            trace!("forwarded {payment} to {}", config.fee_recipient());
            Ok(())
        }
        PayoutOutcome::Rejected => Err(LedgerError::PayoutFailed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{Address, ADDRESS_SIZE};

    fn addr(value: u8) -> Address {
        Address::new([value; ADDRESS_SIZE])
    }

    struct RecordingChannel {
        payouts: Vec<(Address, Amount)>,
    }

    impl PaymentChannel for RecordingChannel {
        fn forward(&mut self, recipient: &Address, amount: Amount) -> PayoutOutcome {
            self.payouts.push((recipient.clone(), amount));
            PayoutOutcome::Accepted
        }
    }

    struct RejectingChannel;

    impl PaymentChannel for RejectingChannel {
        fn forward(&mut self, _recipient: &Address, _amount: Amount) -> PayoutOutcome {
            PayoutOutcome::Rejected
        }
    }

    fn test_config(fee: Amount) -> PlatformConfig {
        PlatformConfig::new(addr(1), fee, addr(2)).expect("valid config")
    }

    #[test]
    fn test_check_payment() {
        let config = test_config(100);
        assert_eq!(
            check_payment(&config, 99),
            Err(LedgerError::InsufficientPayment)
        );
        assert!(check_payment(&config, 100).is_ok());
        assert!(check_payment(&config, 150).is_ok());
    }

    #[test]
    fn test_zero_fee_accepts_zero_payment() {
        let config = test_config(0);
        assert!(check_payment(&config, 0).is_ok());
    }

    #[test]
    fn test_forward_full_payment() {
        let config = test_config(100);
        let mut funds = RecordingChannel { payouts: vec![] };

        forward_payment(&mut funds, &config, 150).expect("forward");

        // The entire payment moves, not just the configured fee
        assert_eq!(funds.payouts, vec![(addr(2), 150)]);
    }

    #[test]
    fn test_rejected_payout() {
        let config = test_config(100);
        let mut funds = RejectingChannel;
        assert_eq!(
            forward_payment(&mut funds, &config, 100),
            Err(LedgerError::PayoutFailed)
        );
    }
}
