//! Property-based tests for the computation pipeline.

use chrono::{DateTime, TimeZone, Utc};
use khata_shared::types::{Money, PartyId, RecordId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::records::types::{
    CreditNote, DeliveryChallan, Expense, PaymentIn, PaymentMode, PaymentOut, PurchaseBill,
    PurchaseOrder, Quotation, RecordBundle, SaleInvoice, SaleOrder,
};

use super::service::LedgerService;
use super::types::{ComputeOptions, Party};

fn ts(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, day, hour, 0, 0).unwrap()
}

fn paise() -> impl Strategy<Value = Money> {
    (0i64..1_000_000).prop_map(Money::from_minor_units)
}

fn day_hour() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=28, 0u32..24)
}

prop_compose! {
    fn sale_strategy()((day, hour) in day_hour(), total in paise(), received in paise()) -> SaleInvoice {
        SaleInvoice {
            record_id: RecordId::new(),
            party_id: PartyId::new(),
            timestamp: Some(ts(day, hour)),
            reference_number: None,
            grand_total: Some(total),
            amount_received: Some(received),
        }
    }
}

prop_compose! {
    fn purchase_strategy()((day, hour) in day_hour(), total in paise(), paid in paise()) -> PurchaseBill {
        PurchaseBill {
            record_id: RecordId::new(),
            party_id: PartyId::new(),
            timestamp: Some(ts(day, hour)),
            reference_number: None,
            grand_total: Some(total),
            amount_paid: Some(paid),
        }
    }
}

prop_compose! {
    fn payment_in_strategy()((day, hour) in day_hour(), amount in paise()) -> PaymentIn {
        PaymentIn {
            record_id: RecordId::new(),
            party_id: PartyId::new(),
            timestamp: Some(ts(day, hour)),
            reference_number: None,
            amount_received: Some(amount),
        }
    }
}

prop_compose! {
    fn payment_out_strategy()((day, hour) in day_hour(), amount in paise()) -> PaymentOut {
        PaymentOut {
            record_id: RecordId::new(),
            party_id: PartyId::new(),
            timestamp: Some(ts(day, hour)),
            reference_number: None,
            amount_paid: Some(amount),
        }
    }
}

prop_compose! {
    fn credit_note_strategy()((day, hour) in day_hour(), total in paise()) -> CreditNote {
        CreditNote {
            record_id: RecordId::new(),
            party_id: PartyId::new(),
            timestamp: Some(ts(day, hour)),
            reference_number: None,
            grand_total: Some(total),
        }
    }
}

prop_compose! {
    fn expense_strategy()(
        (day, hour) in day_hour(),
        total in paise(),
        received in paise(),
        credit in any::<bool>(),
    ) -> Expense {
        Expense {
            record_id: RecordId::new(),
            party_id: PartyId::new(),
            timestamp: Some(ts(day, hour)),
            reference_number: None,
            total_amount: Some(total),
            received_amount: Some(received),
            payment_mode: if credit { PaymentMode::Credit } else { PaymentMode::Cash },
        }
    }
}

prop_compose! {
    fn quotation_strategy()((day, hour) in day_hour(), total in paise()) -> Quotation {
        Quotation {
            record_id: RecordId::new(),
            party_id: PartyId::new(),
            timestamp: Some(ts(day, hour)),
            reference_number: None,
            total: Some(total),
        }
    }
}

prop_compose! {
    fn sale_order_strategy()((day, hour) in day_hour(), total in paise()) -> SaleOrder {
        SaleOrder {
            record_id: RecordId::new(),
            party_id: PartyId::new(),
            timestamp: Some(ts(day, hour)),
            reference_number: None,
            total: Some(total),
        }
    }
}

prop_compose! {
    fn purchase_order_strategy()((day, hour) in day_hour(), total in paise()) -> PurchaseOrder {
        PurchaseOrder {
            record_id: RecordId::new(),
            party_id: PartyId::new(),
            timestamp: Some(ts(day, hour)),
            reference_number: None,
            total: Some(total),
        }
    }
}

prop_compose! {
    fn challan_strategy()((day, hour) in day_hour(), total in paise()) -> DeliveryChallan {
        DeliveryChallan {
            record_id: RecordId::new(),
            party_id: PartyId::new(),
            timestamp: Some(ts(day, hour)),
            reference_number: None,
            total: Some(total),
        }
    }
}

prop_compose! {
    fn bundle_strategy()(
        sales in prop::collection::vec(sale_strategy(), 0..8),
        purchases in prop::collection::vec(purchase_strategy(), 0..8),
        payments_in in prop::collection::vec(payment_in_strategy(), 0..8),
        payments_out in prop::collection::vec(payment_out_strategy(), 0..8),
        credit_notes in prop::collection::vec(credit_note_strategy(), 0..8),
        expenses in prop::collection::vec(expense_strategy(), 0..8),
        quotations in prop::collection::vec(quotation_strategy(), 0..4),
        sale_orders in prop::collection::vec(sale_order_strategy(), 0..4),
        purchase_orders in prop::collection::vec(purchase_order_strategy(), 0..4),
        challans in prop::collection::vec(challan_strategy(), 0..4),
    ) -> RecordBundle {
        RecordBundle {
            sales,
            purchases,
            payments_in,
            payments_out,
            credit_notes,
            expenses,
            quotations,
            sale_orders,
            purchase_orders,
            challans,
            partial: false,
        }
    }
}

fn opening_strategy() -> impl Strategy<Value = Money> {
    (-1_000_000i64..1_000_000).prop_map(Money::from_minor_units)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Fold invariant: the last running balance equals the opening balance
    /// plus the sum of every delta.
    #[test]
    fn prop_fold_invariant(opening in opening_strategy(), bundle in bundle_strategy()) {
        let mut party = Party::new(PartyId::new(), "Prop Party");
        party.opening_balance = opening;

        let result = LedgerService::compute(&party, &bundle, &ComputeOptions::default()).unwrap();
        let delta_sum: Money = result.ledger.iter().map(|e| e.balance_delta).sum();
        prop_assert_eq!(result.final_balance(), opening + delta_sum);
    }

    /// Determinism: identical input yields a byte-identical result.
    #[test]
    fn prop_identical_inputs_identical_ledgers(
        opening in opening_strategy(),
        bundle in bundle_strategy(),
    ) {
        let mut party = Party::new(PartyId::new(), "Prop Party");
        party.opening_balance = opening;
        let options = ComputeOptions::default();

        let first = LedgerService::compute(&party, &bundle, &options).unwrap();
        let second = LedgerService::compute(&party, &bundle, &options).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    /// Non-financial neutrality: documents of intent never move any other
    /// entry's running balance or the summary's monetary totals.
    #[test]
    fn prop_documents_of_intent_are_neutral(
        opening in opening_strategy(),
        bundle in bundle_strategy(),
    ) {
        let mut party = Party::new(PartyId::new(), "Prop Party");
        party.opening_balance = opening;
        let options = ComputeOptions::default();

        let mut without_docs = bundle.clone();
        without_docs.quotations.clear();
        without_docs.sale_orders.clear();
        without_docs.purchase_orders.clear();
        without_docs.challans.clear();

        let with_docs = LedgerService::compute(&party, &bundle, &options).unwrap();
        let bare = LedgerService::compute(&party, &without_docs, &options).unwrap();

        let financial: Vec<_> = with_docs
            .ledger
            .iter()
            .filter(|e| e.kind.is_financial())
            .collect();
        let bare_entries: Vec<_> = bare.ledger.iter().collect();
        prop_assert_eq!(financial, bare_entries);

        prop_assert_eq!(with_docs.summary.total_sale, bare.summary.total_sale);
        prop_assert_eq!(with_docs.summary.total_purchase, bare.summary.total_purchase);
        prop_assert_eq!(with_docs.summary.total_payment_in, bare.summary.total_payment_in);
        prop_assert_eq!(with_docs.summary.total_payment_out, bare.summary.total_payment_out);
        prop_assert_eq!(with_docs.summary.total_expense, bare.summary.total_expense);
        prop_assert_eq!(with_docs.summary.total_receivable, bare.summary.total_receivable);
        prop_assert_eq!(with_docs.final_balance(), bare.final_balance());
    }

    /// The ledger is always sorted ascending by timestamp with the fixed
    /// kind priority as the tie-break.
    #[test]
    fn prop_ledger_is_chronologically_ordered(
        opening in opening_strategy(),
        bundle in bundle_strategy(),
    ) {
        let mut party = Party::new(PartyId::new(), "Prop Party");
        party.opening_balance = opening;

        let result = LedgerService::compute(&party, &bundle, &ComputeOptions::default()).unwrap();
        for pair in result.ledger.windows(2) {
            let a = (pair[0].timestamp, pair[0].kind.sort_priority());
            let b = (pair[1].timestamp, pair[1].kind.sort_priority());
            prop_assert!(a <= b);
        }
    }

    /// Summary totals are never fractions of a paisa.
    #[test]
    fn prop_totals_fit_minor_units(opening in opening_strategy(), bundle in bundle_strategy()) {
        let mut party = Party::new(PartyId::new(), "Prop Party");
        party.opening_balance = opening;

        let result = LedgerService::compute(&party, &bundle, &ComputeOptions::default()).unwrap();
        let minor = result.summary.total_receivable.to_minor_units().unwrap();
        prop_assert_eq!(
            Money::from_minor_units(minor),
            result.summary.total_receivable
        );
        let _ = Decimal::from(minor); // paise totals stay in integer range
    }
}
