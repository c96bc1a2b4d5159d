use super::{
    entity::{BookedSeatsFindEntity, TicketFindEntity, TicketInsertEntity},
    Ticket, TicketsRepository,
};
use crate::repository::{create_index, inserted_object_id, Error};
use axum::async_trait;
use bson::{doc, oid::ObjectId, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::Database;
use time::OffsetDateTime;
use uuid::Uuid;

const TICKETS: &str = "tickets";
const INDEX_NAME_UNIQUE_BOOKING_CODE: &str = "unique_index_booking_code";
const INDEX_NAME_UNIQUE_SEAT: &str = "unique_index_showtime_id_time_slot_seat_ids";
const INDEX_NAME_USER_ID: &str = "index_user_id";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection = database.collection::<Document>(TICKETS);

        create_index(
            &collection,
            INDEX_NAME_UNIQUE_BOOKING_CODE,
            doc! { "booking_code": 1 },
            true,
        )
        .await?;
        // seat_ids is an array, so every seat gets its own index entry
        create_index(
            &collection,
            INDEX_NAME_UNIQUE_SEAT,
            doc! {
                "showtime_id": 1,
                "time_slot": 1,
                "seat_ids": 1,
            },
            true,
        )
        .await?;
        create_index(&collection, INDEX_NAME_USER_ID, doc! { "user_id": 1 }, false).await?;

        Ok(Self { database })
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(
        &self,
        booking_code: Uuid,
        showtime_id: ObjectId,
        time_slot: &str,
        seat_ids: Vec<String>,
        ticket_price: i64,
        total_price: i64,
        user_id: ObjectId,
        booked_at: OffsetDateTime,
    ) -> Result<Ticket, Error> {
        let insert_entity = TicketInsertEntity {
            booking_code: booking_code.into(),
            showtime_id,
            time_slot,
            seat_ids: &seat_ids,
            ticket_price,
            total_price,
            user_id,
            booked_at: DateTime::from(booked_at),
        };

        let insert_result = self
            .database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_write)?;

        let id = inserted_object_id(insert_result.inserted_id)?;

        Ok(Ticket {
            id,
            booking_code,
            showtime_id,
            time_slot: time_slot.to_string(),
            seat_ids,
            ticket_price,
            total_price,
            user_id,
            booked_at,
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, Error> {
        let ticket = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! { "_id": id })
            .await?
            .map(Ticket::from);

        Ok(ticket)
    }

    async fn find_by_user(&self, user_id: ObjectId) -> Result<Vec<Ticket>, Error> {
        let tickets = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find(doc! { "user_id": user_id })
            .sort(doc! { "booked_at": -1 })
            .await?
            .map_ok(Ticket::from)
            .try_collect()
            .await?;

        Ok(tickets)
    }

    async fn find_booked_seats(
        &self,
        showtime_id: ObjectId,
        time_slot: &str,
    ) -> Result<Vec<String>, Error> {
        let tickets = self
            .database
            .collection::<BookedSeatsFindEntity>(TICKETS)
            .find(doc! {
                "showtime_id": showtime_id,
                "time_slot": time_slot,
            })
            .projection(doc! {
                "_id": 0,
                "seat_ids": 1,
            })
            .await?
            .try_collect::<Vec<_>>()
            .await?;

        let seat_ids = tickets
            .into_iter()
            .flat_map(|ticket| ticket.seat_ids)
            .collect();

        Ok(seat_ids)
    }

    async fn exists_for_showtime(&self, showtime_id: ObjectId) -> Result<bool, Error> {
        let ticket = self
            .database
            .collection::<Document>(TICKETS)
            .find_one(doc! { "showtime_id": showtime_id })
            .projection(doc! { "_id": 1 })
            .await?;

        Ok(ticket.is_some())
    }

    async fn delete(&self, id: ObjectId) -> Result<(), Error> {
        let delete_result = self
            .database
            .collection::<Document>(TICKETS)
            .delete_one(doc! { "_id": id })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
