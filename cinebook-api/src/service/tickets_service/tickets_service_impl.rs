use super::{
    mails,
    seats::{self, Layout},
    TicketsService,
};
use crate::{
    auth::{Role, User},
    dto::{input, output},
    error::Error,
    repository::{
        self, MoviesRepository, ShowtimesRepository, TheatresRepository, TicketsRepository,
        UsersRepository,
    },
    service::{parse_daytime, parse_object_id, validate_not_blank, Mail, MailService},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::{collections::HashMap, sync::Arc};
use time::OffsetDateTime;
use uuid::Uuid;

pub struct TicketsServiceImpl {
    users_repository: Arc<dyn UsersRepository>,
    movies_repository: Arc<dyn MoviesRepository>,
    theatres_repository: Arc<dyn TheatresRepository>,
    showtimes_repository: Arc<dyn ShowtimesRepository>,
    tickets_repository: Arc<dyn TicketsRepository>,
    mail_service: Arc<dyn MailService>,
}

impl TicketsServiceImpl {
    pub fn new(
        users_repository: Arc<dyn UsersRepository>,
        movies_repository: Arc<dyn MoviesRepository>,
        theatres_repository: Arc<dyn TheatresRepository>,
        showtimes_repository: Arc<dyn ShowtimesRepository>,
        tickets_repository: Arc<dyn TicketsRepository>,
        mail_service: Arc<dyn MailService>,
    ) -> Self {
        Self {
            users_repository,
            movies_repository,
            theatres_repository,
            showtimes_repository,
            tickets_repository,
            mail_service,
        }
    }

    fn spawn_mail(&self, mail: Mail) {
        let mail_service = self.mail_service.clone();
        tokio::spawn(async move {
            if let Err(err) = mail_service.send(mail).await {
                tracing::warn!(%err, "failed to send mail");
            }
        });
    }

    fn total_price(ticket_price: i64, seats: usize) -> Result<i64, Error> {
        i64::try_from(seats)
            .ok()
            .and_then(|seats| ticket_price.checked_mul(seats))
            .ok_or_else(|| Error::Validation("total price is too large".to_string()))
    }

    ///
    /// Finds ticket visible to the user.
    /// Tickets of other users are visible only to super admins when allowed.
    ///
    async fn find_visible(
        &self,
        user: &User,
        id: ObjectId,
        allow_super_admin: bool,
    ) -> Result<repository::Ticket, Error> {
        let ticket = self
            .tickets_repository
            .find(id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        if ticket.user_id == user.id {
            return Ok(ticket);
        }
        if allow_super_admin {
            let role = self
                .users_repository
                .find(user.id)
                .await?
                .map(|user| user.role);
            if role == Some(Role::SuperAdmin) {
                return Ok(ticket);
            }
        }

        Err(Error::TicketNotExist)
    }

    ///
    /// Mails go to the stored address, the token may carry an old one
    ///
    async fn find_email(&self, user_id: ObjectId) -> Result<Option<String>, Error> {
        let user = self.users_repository.find(user_id).await?;

        Ok(user.map(|user| user.email))
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn book(
        &self,
        user: &User,
        booking: input::BookTicket,
    ) -> Result<output::BookedTicket, Error> {
        tracing::info!("booking ticket");
        tracing::trace!(?booking);

        let showtime_id = parse_object_id(&booking.showtime_id)?;
        let time_slot = parse_daytime(&booking.time_slot, "time_slot")?;

        let showtime = self
            .showtimes_repository
            .find(showtime_id)
            .await?
            .ok_or(Error::ShowtimeNotExist)?;
        if showtime.daytime != time_slot {
            return Err(Error::Validation(
                "time_slot does not match the showtime".to_string(),
            ));
        }

        let layout = self
            .theatres_repository
            .find(showtime.theatre_id)
            .await?
            .map(|theatre| Layout {
                rows: theatre.rows,
                cols: theatre.cols,
            });
        let seat_ids = seats::normalize_seat_ids(&booking.seat_ids, layout)?;

        if let Some(ticket_price) = booking.ticket_price {
            if ticket_price != showtime.ticket_price {
                return Err(Error::Validation(
                    "ticket_price does not match the showtime".to_string(),
                ));
            }
        }
        let ticket_price = showtime.ticket_price;
        let total_price = Self::total_price(ticket_price, seat_ids.len())?;

        let ticket = self
            .tickets_repository
            .insert(
                Uuid::new_v4(),
                showtime_id,
                &time_slot,
                seat_ids,
                ticket_price,
                total_price,
                user.id,
                OffsetDateTime::now_utc(),
            )
            .await
            .map_err(|err| match err {
                repository::Error::InsertUniqueViolation => Error::SeatsAlreadyBooked,
                err => Error::Database(err),
            })?;

        tracing::info!(
            id = %ticket.id,
            booking_code = %ticket.booking_code,
            seats = ticket.seat_ids.len(),
            "booked ticket"
        );

        match self.find_email(user.id).await {
            Ok(Some(email)) => {
                self.spawn_mail(mails::booking_confirmation(&email, &ticket, Some(&showtime)));
            }
            Ok(None) => tracing::debug!("user does not exist, skipping mail"),
            Err(err) => tracing::warn!(%err, "failed to find user email"),
        }

        Ok(output::BookedTicket::from(ticket))
    }

    async fn find_booked_seats(
        &self,
        query: input::BookedSeatsQuery,
    ) -> Result<output::BookedSeats, Error> {
        tracing::info!("finding booked seats");
        tracing::trace!(?query);

        let (Some(showtime_id), Some(time_slot)) = (query.showtime_id, query.time_slot) else {
            return Err(Error::Validation(
                "showtime_id and time_slot are required".to_string(),
            ));
        };
        validate_not_blank(&showtime_id, "showtime_id")?;
        validate_not_blank(&time_slot, "time_slot")?;

        let showtime_id = parse_object_id(&showtime_id)?;
        let time_slot = parse_daytime(&time_slot, "time_slot")?;

        let seat_ids = self
            .tickets_repository
            .find_booked_seats(showtime_id, &time_slot)
            .await?;
        tracing::info!(count = seat_ids.len(), "found booked seats");

        Ok(output::BookedSeats { seat_ids })
    }

    async fn find_own(&self, user: &User) -> Result<Vec<output::UserTicket>, Error> {
        tracing::info!("finding own tickets");

        let tickets = self.tickets_repository.find_by_user(user.id).await?;
        tracing::info!(count = tickets.len(), "found tickets");

        if tickets.is_empty() {
            return Ok(Vec::new());
        }

        let mut showtime_ids = tickets
            .iter()
            .map(|ticket| ticket.showtime_id)
            .collect::<Vec<_>>();
        showtime_ids.sort();
        showtime_ids.dedup();
        let showtimes = self
            .showtimes_repository
            .find_many(showtime_ids)
            .await?
            .into_iter()
            .map(|showtime| (showtime.id, showtime))
            .collect::<HashMap<_, _>>();

        let mut movie_ids = showtimes
            .values()
            .map(|showtime| showtime.movie_id)
            .collect::<Vec<_>>();
        movie_ids.sort();
        movie_ids.dedup();
        let mut theatre_ids = showtimes
            .values()
            .map(|showtime| showtime.theatre_id)
            .collect::<Vec<_>>();
        theatre_ids.sort();
        theatre_ids.dedup();

        let movies = self
            .movies_repository
            .find_many(movie_ids)
            .await?
            .into_iter()
            .map(|movie| (movie.id, movie))
            .collect::<HashMap<_, _>>();
        let theatres = self
            .theatres_repository
            .find_many(theatre_ids)
            .await?
            .into_iter()
            .map(|theatre| (theatre.id, theatre))
            .collect::<HashMap<_, _>>();

        let tickets = tickets
            .into_iter()
            .map(|ticket| {
                let showtime = showtimes.get(&ticket.showtime_id);
                let movie = showtime.and_then(|showtime| movies.get(&showtime.movie_id));
                let theatre = showtime.and_then(|showtime| theatres.get(&showtime.theatre_id));

                output::UserTicket::new(ticket, showtime, movie, theatre)
            })
            .collect();

        Ok(tickets)
    }

    async fn cancel(&self, user: &User, id: ObjectId) -> Result<(), Error> {
        tracing::info!(%id, "cancelling ticket");

        let ticket = self.find_visible(user, id, true).await?;
        self.tickets_repository
            .delete(id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::TicketNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!(%id, booking_code = %ticket.booking_code, "cancelled ticket");

        match self.find_email(ticket.user_id).await {
            Ok(Some(email)) => {
                let booking_code = ticket.booking_code.to_string();
                self.spawn_mail(mails::cancellation(&email, &booking_code, &ticket.seat_ids));
            }
            Ok(None) => tracing::debug!("ticket owner does not exist, skipping mail"),
            Err(err) => tracing::warn!(%err, "failed to find ticket owner"),
        }

        Ok(())
    }

    async fn send_booking_confirmation(
        &self,
        user: &User,
        ticket_id: ObjectId,
    ) -> Result<(), Error> {
        tracing::info!(%ticket_id, "sending booking confirmation");

        let ticket = self.find_visible(user, ticket_id, false).await?;
        let showtime = self.showtimes_repository.find(ticket.showtime_id).await?;
        let email = self.find_email(user.id).await?.ok_or(Error::UserNotExist)?;

        let mail = mails::booking_confirmation(&email, &ticket, showtime.as_ref());
        self.mail_service.send(mail).await?;

        tracing::info!(%ticket_id, "sent booking confirmation");

        Ok(())
    }

    async fn send_cancellation(
        &self,
        user: &User,
        details: input::CancellationEmail,
    ) -> Result<(), Error> {
        tracing::info!("sending cancellation");
        tracing::trace!(?details);

        validate_not_blank(&details.booking_code, "booking_code")?;
        let email = self.find_email(user.id).await?.ok_or(Error::UserNotExist)?;

        let mail = mails::cancellation(
            &email,
            details.booking_code.trim(),
            &details.seat_ids,
        );
        self.mail_service.send(mail).await?;

        tracing::info!("sent cancellation");

        Ok(())
    }
}
