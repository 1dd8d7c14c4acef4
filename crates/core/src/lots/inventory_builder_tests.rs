#[cfg(test)]
mod tests {
    use crate::lots::{LotInventoryBuilder, OpenLot};
    use crate::transactions::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(
        id: &str,
        transaction_type: &str,
        date: NaiveDate,
        quantity: Decimal,
        price_per_unit: Decimal,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            asset_id: "ASSET-1".to_string(),
            transaction_type: transaction_type.to_string(),
            date,
            quantity,
            price_per_unit,
            fees: Decimal::ZERO,
            currency: "USD".to_string(),
            details: None,
        }
    }

    fn buy(id: &str, d: NaiveDate, qty: Decimal, price: Decimal) -> Transaction {
        tx(id, TRANSACTION_TYPE_BUY, d, qty, price)
    }

    fn sell(id: &str, d: NaiveDate, qty: Decimal) -> Transaction {
        tx(id, TRANSACTION_TYPE_SELL, d, qty, dec!(15))
    }

    fn total_remaining(lots: &[OpenLot]) -> Decimal {
        lots.iter().map(|l| l.remaining_quantity).sum()
    }

    #[test]
    fn all_buys_stay_open_without_sells() {
        let transactions = vec![
            buy("b1", date(2023, 1, 1), dec!(100), dec!(10)),
            buy("b2", date(2023, 6, 1), dec!(50), dec!(20)),
        ];
        let lots = LotInventoryBuilder::new().build_open_lots(&transactions);

        assert_eq!(lots.len(), 2);
        assert_eq!(lots[0].source_transaction_id, "b1");
        assert_eq!(lots[0].remaining_quantity, dec!(100));
        assert_eq!(lots[1].remaining_quantity, dec!(50));
        assert_eq!(lots[1].cost_per_unit, dec!(20));
    }

    #[test]
    fn default_fifo_consumption_drains_earliest_lot_first() {
        let transactions = vec![
            buy("b1", date(2023, 1, 1), dec!(100), dec!(10)),
            buy("b2", date(2023, 6, 1), dec!(50), dec!(20)),
            sell("s1", date(2023, 7, 1), dec!(120)),
        ];
        let lots = LotInventoryBuilder::new().build_open_lots(&transactions);

        assert_eq!(lots.len(), 1);
        assert_eq!(lots[0].source_transaction_id, "b2");
        assert_eq!(lots[0].remaining_quantity, dec!(30));
        assert_eq!(lots[0].original_quantity, dec!(50));
    }

    #[test]
    fn unordered_input_is_sorted_by_date() {
        let transactions = vec![
            sell("s1", date(2023, 7, 1), dec!(80)),
            buy("b2", date(2023, 6, 1), dec!(50), dec!(20)),
            buy("b1", date(2023, 1, 1), dec!(100), dec!(10)),
        ];
        let lots = LotInventoryBuilder::new().build_open_lots(&transactions);

        assert_eq!(lots.len(), 2);
        assert_eq!(lots[0].source_transaction_id, "b1");
        assert_eq!(lots[0].remaining_quantity, dec!(20));
        assert_eq!(lots[1].remaining_quantity, dec!(50));
    }

    #[test]
    fn oversold_history_caps_instead_of_failing() {
        let transactions = vec![
            buy("b1", date(2023, 1, 1), dec!(10), dec!(10)),
            sell("s1", date(2023, 2, 1), dec!(25)),
        ];
        let lots = LotInventoryBuilder::new().build_open_lots(&transactions);
        assert!(lots.is_empty());
    }

    #[test]
    fn sell_before_any_buy_consumes_the_later_buy() {
        let transactions = vec![
            sell("s1", date(2023, 1, 1), dec!(30)),
            buy("b1", date(2023, 2, 1), dec!(100), dec!(10)),
        ];
        let lots = LotInventoryBuilder::new().build_open_lots(&transactions);

        assert_eq!(lots.len(), 1);
        assert_eq!(lots[0].remaining_quantity, dec!(70));
    }

    #[test]
    fn explicit_allocation_overrides_fifo() {
        let mut sell_tx = sell("s1", date(2023, 7, 1), dec!(40));
        sell_tx.details = Some(json!({ "links": { "b2": 40 } }));

        let transactions = vec![
            buy("b1", date(2023, 1, 1), dec!(100), dec!(10)),
            buy("b2", date(2023, 6, 1), dec!(50), dec!(20)),
            sell_tx,
        ];
        let lots = LotInventoryBuilder::new().build_open_lots(&transactions);

        assert_eq!(lots.len(), 2);
        // The earliest lot is untouched; only the referenced lot shrank.
        assert_eq!(lots[0].source_transaction_id, "b1");
        assert_eq!(lots[0].remaining_quantity, dec!(100));
        assert_eq!(lots[1].source_transaction_id, "b2");
        assert_eq!(lots[1].remaining_quantity, dec!(10));
    }

    #[test]
    fn allocation_referencing_unknown_lot_is_ignored() {
        let mut sell_tx = sell("s1", date(2023, 7, 1), dec!(40));
        sell_tx.details = Some(json!({ "links": { "nope": 40 } }));

        let transactions = vec![buy("b1", date(2023, 1, 1), dec!(100), dec!(10)), sell_tx];
        let lots = LotInventoryBuilder::new().build_open_lots(&transactions);

        assert_eq!(lots.len(), 1);
        assert_eq!(lots[0].remaining_quantity, dec!(100));
    }

    #[test]
    fn split_rescales_open_lots_and_preserves_cost_basis() {
        let transactions = vec![
            buy("b1", date(2023, 1, 1), dec!(100), dec!(10)),
            tx("sp1", TRANSACTION_TYPE_SPLIT, date(2023, 3, 1), dec!(2), dec!(1)),
        ];
        let lots = LotInventoryBuilder::new().build_open_lots(&transactions);

        assert_eq!(lots.len(), 1);
        assert_eq!(lots[0].remaining_quantity, dec!(200));
        assert_eq!(lots[0].cost_per_unit, dec!(5));
        assert_eq!(lots[0].cost_basis(), dec!(1000));
        // Acquisition date is untouched; the holding period continues.
        assert_eq!(lots[0].acquisition_date, date(2023, 1, 1));
    }

    #[test]
    fn split_applies_only_to_lots_open_at_its_date() {
        let transactions = vec![
            buy("b1", date(2023, 1, 1), dec!(100), dec!(10)),
            tx("sp1", TRANSACTION_TYPE_SPLIT, date(2023, 3, 1), dec!(2), dec!(1)),
            buy("b2", date(2023, 6, 1), dec!(50), dec!(20)),
        ];
        let lots = LotInventoryBuilder::new().build_open_lots(&transactions);

        assert_eq!(lots[0].remaining_quantity, dec!(200));
        assert_eq!(lots[1].remaining_quantity, dec!(50));
        assert_eq!(lots[1].cost_per_unit, dec!(20));
    }

    #[test]
    fn bonus_opens_a_zero_cost_lot_dated_at_the_action() {
        let transactions = vec![
            buy("b1", date(2023, 1, 1), dec!(100), dec!(10)),
            tx("bn1", TRANSACTION_TYPE_BONUS, date(2023, 4, 1), dec!(1), dec!(2)),
        ];
        let lots = LotInventoryBuilder::new().build_open_lots(&transactions);

        assert_eq!(lots.len(), 2);
        assert_eq!(lots[1].source_transaction_id, "bn1");
        assert_eq!(lots[1].remaining_quantity, dec!(50));
        assert_eq!(lots[1].cost_per_unit, Decimal::ZERO);
        assert_eq!(lots[1].acquisition_date, date(2023, 4, 1));
    }

    #[test]
    fn merger_closes_the_holding() {
        let transactions = vec![
            buy("b1", date(2023, 1, 1), dec!(100), dec!(10)),
            tx("m1", TRANSACTION_TYPE_MERGER, date(2023, 5, 1), dec!(1), dec!(1)),
        ];
        let lots = LotInventoryBuilder::new().build_open_lots(&transactions);
        assert!(lots.is_empty());
    }

    #[test]
    fn demerger_rename_and_cash_types_leave_quantities_untouched() {
        let transactions = vec![
            buy("b1", date(2023, 1, 1), dec!(100), dec!(10)),
            tx("d1", TRANSACTION_TYPE_DEMERGER, date(2023, 2, 1), dec!(1), dec!(1)),
            tx("r1", TRANSACTION_TYPE_RENAME, date(2023, 3, 1), dec!(1), dec!(1)),
            tx("dv1", TRANSACTION_TYPE_DIVIDEND, date(2023, 4, 1), dec!(500), dec!(1)),
            tx("c1", TRANSACTION_TYPE_COUPON, date(2023, 5, 1), dec!(100), dec!(1)),
        ];
        let lots = LotInventoryBuilder::new().build_open_lots(&transactions);

        assert_eq!(lots.len(), 1);
        assert_eq!(lots[0].remaining_quantity, dec!(100));
    }

    #[test]
    fn zero_quantity_and_zero_price_buys_are_excluded() {
        let transactions = vec![
            buy("b1", date(2023, 1, 1), dec!(0), dec!(10)),
            buy("b2", date(2023, 2, 1), dec!(10), dec!(0)),
            buy("b3", date(2023, 3, 1), dec!(10), dec!(10)),
        ];
        let lots = LotInventoryBuilder::new().build_open_lots(&transactions);

        assert_eq!(lots.len(), 1);
        assert_eq!(lots[0].source_transaction_id, "b3");
    }

    proptest! {
        /// sum(remaining) == total bought - total sold whenever the history
        /// is not oversold.
        #[test]
        fn open_quantity_is_conserved(
            buys in prop::collection::vec(1u32..500, 1..8),
            sell_fraction in 0u32..100,
        ) {
            let total_bought: u32 = buys.iter().sum();
            let total_sold = total_bought * sell_fraction / 100;

            let mut transactions: Vec<Transaction> = buys
                .iter()
                .enumerate()
                .map(|(i, qty)| {
                    buy(
                        &format!("b{}", i),
                        date(2023, 1, 1) + chrono::Days::new(i as u64),
                        Decimal::from(*qty),
                        dec!(10),
                    )
                })
                .collect();
            if total_sold > 0 {
                transactions.push(sell("s1", date(2024, 1, 1), Decimal::from(total_sold)));
            }

            let lots = LotInventoryBuilder::new().build_open_lots(&transactions);
            prop_assert_eq!(
                total_remaining(&lots),
                Decimal::from(total_bought - total_sold)
            );
        }
    }
}
