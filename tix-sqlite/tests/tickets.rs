mod common;

use common::{now, open, reserved_ticket};
use tix_core::{
    eligibility::Failure,
    models::{CardData, NewPayment, TicketId, TicketStatus, TicketTypeId, UserId},
    ports::{CatalogRepository, PaymentRepository, TicketRepository},
    services::PaymentService,
};

#[tokio::test]
async fn ticket_types_are_listed_in_order() -> anyhow::Result<()> {
    let db = open().await?;
    assert!(db.list_ticket_types().await?.is_empty());

    db.create_ticket_type("Remote", 100, true, false, now()).await?;
    db.create_ticket_type("In person", 250, false, false, now()).await?;

    let types = db.list_ticket_types().await?;
    assert_eq!(types.len(), 2);
    assert_eq!(types[0].name, "Remote");
    assert!(types[0].is_remote);
    assert_eq!(types[1].price, 250);

    Ok(())
}

#[tokio::test]
async fn created_tickets_are_reserved() -> anyhow::Result<()> {
    let db = open().await?;
    let (kind, ticket) = reserved_ticket(&db, UserId(7), 300).await?;

    let mine = db.get_ticket_by_user(UserId(7)).await?.unwrap();
    assert_eq!(mine.id, ticket);
    assert_eq!(mine.status, TicketStatus::Reserved);
    assert_eq!(mine.ticket_type_id, kind);
    assert_eq!(mine.ticket_type.price, 300);
    assert!(mine.ticket_type.includes_hotel);

    let record = db.get_ticket(ticket).await?.unwrap();
    assert_eq!(record.user_id, UserId(7));
    assert_eq!(record.ticket, mine);

    assert!(db.get_ticket_by_user(UserId(8)).await?.is_none());
    assert!(db.get_ticket(TicketId(999)).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn unknown_ticket_type_creates_nothing() -> anyhow::Result<()> {
    let db = open().await?;
    let enrollment = db.create_enrollment(UserId(1), now()).await?;

    assert_eq!(db.get_enrollment(UserId(1)).await?, Some(enrollment.clone()));
    assert!(db.get_enrollment(UserId(2)).await?.is_none());

    let ticket = db.create_ticket(&enrollment, TicketTypeId(42), now()).await?;
    assert!(ticket.is_none());
    assert!(db.get_ticket_by_user(UserId(1)).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn payment_marks_ticket_paid() -> anyhow::Result<()> {
    let db = open().await?;
    let (_, ticket) = reserved_ticket(&db, UserId(3), 500).await?;
    assert!(db.get_payment_by_ticket(ticket).await?.is_none());

    let payment = db
        .create_payment(
            NewPayment {
                ticket_id: ticket,
                value: 500,
                card_issuer: "VISA".to_owned(),
                card_last_digits: "4242".to_owned(),
            },
            now(),
        )
        .await?
        .unwrap();
    assert_eq!(payment.ticket_id, ticket);
    assert_eq!(payment.card_last_digits, "4242");

    let record = db.get_ticket(ticket).await?.unwrap();
    assert_eq!(record.ticket.status, TicketStatus::Paid);
    assert_eq!(db.get_payment_by_ticket(ticket).await?, Some(payment));

    Ok(())
}

#[tokio::test]
async fn second_payment_rolls_back() -> anyhow::Result<()> {
    let db = open().await?;
    let (_, ticket) = reserved_ticket(&db, UserId(3), 500).await?;
    let payment = NewPayment {
        ticket_id: ticket,
        value: 500,
        card_issuer: "VISA".to_owned(),
        card_last_digits: "4242".to_owned(),
    };

    assert!(db.create_payment(payment.clone(), now()).await?.is_some());
    assert!(db.create_payment(payment, now()).await?.is_none());

    let count: i64 = sqlx::query_scalar("select count(*) from payment")
        .fetch_one(&db.reader)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

#[tokio::test]
async fn payment_for_missing_ticket_fails() -> anyhow::Result<()> {
    let db = open().await?;
    let result = db
        .create_payment(
            NewPayment {
                ticket_id: TicketId(999),
                value: 1,
                card_issuer: "VISA".to_owned(),
                card_last_digits: "0000".to_owned(),
            },
            now(),
        )
        .await;
    assert!(result.is_err());
    assert!(db.get_payment_by_ticket(TicketId(999)).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn racing_payments_record_one() -> anyhow::Result<()> {
    let db = open().await?;
    let (_, ticket) = reserved_ticket(&db, UserId(4), 500).await?;
    let card = CardData {
        issuer: "VISA".to_owned(),
        number: "4111111111114242".to_owned(),
        name: "Jane Doe".to_owned(),
        expiration_date: "12/30".to_owned(),
        cvv: "123".to_owned(),
    };

    // Both calls read the ticket as RESERVED before either one writes.
    let service = PaymentService::new(&db);
    let (first, second) = tokio::join!(
        service.submit_payment(ticket, &card, UserId(4), now()),
        service.submit_payment(ticket, &card, UserId(4), now()),
    );

    let mut outcomes = vec![
        first?.map(|payment| payment.ticket_id),
        second?.map(|payment| payment.ticket_id),
    ];
    outcomes.sort_by_key(|outcome| outcome.is_err());
    assert_eq!(outcomes, vec![Ok(ticket), Err(Failure::Forbidden)]);

    let count: i64 = sqlx::query_scalar("select count(*) from payment")
        .fetch_one(&db.reader)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}
