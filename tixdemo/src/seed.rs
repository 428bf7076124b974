//! Loading reference data from a JSON catalog file.
//!
//! Ticket types, hotels, rooms and enrollments have no API of their own, so a
//! fresh database is filled from a catalog on startup. Applying a catalog is
//! safe to repeat: ticket types and hotels are only written into an empty
//! database, and users who are already enrolled are skipped. The whole
//! catalog is checked before anything is written, so a bad entry cannot
//! leave a hotel half-seeded.

use anyhow::Context as _;
use serde::Deserialize;
use std::path::Path;
use tix_core::{
    models::{DateTime, UserId},
    ports::{CatalogRepository, HotelRepository, TicketRepository},
};
use tracing::{Level, event};

/// The contents of a catalog file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Catalog {
    /// Ticket types on sale
    #[serde(default)]
    pub ticket_types: Vec<TicketTypeEntry>,
    /// Hotels along with their rooms
    #[serde(default)]
    pub hotels: Vec<HotelEntry>,
    /// Users allowed to purchase tickets
    #[serde(default)]
    pub enrollments: Vec<UserId>,
}

/// A ticket type to create.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TicketTypeEntry {
    /// Display name
    pub name: String,
    /// Price in whole currency units
    pub price: i64,
    /// Remote attendance only
    #[serde(default)]
    pub is_remote: bool,
    /// Includes hotel lodging
    #[serde(default)]
    pub includes_hotel: bool,
}

/// A hotel to create.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HotelEntry {
    /// Display name
    pub name: String,
    /// Image URL
    pub image: String,
    /// The hotel's rooms
    #[serde(default)]
    pub rooms: Vec<RoomEntry>,
}

/// A room to create within its hotel.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RoomEntry {
    /// Display name (e.g. the room number)
    pub name: String,
    /// Maximum number of bookings
    pub capacity: i64,
}

/// Counts of what a call to [`Catalog::apply`] actually wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Ticket types created
    pub ticket_types: usize,
    /// Hotels created
    pub hotels: usize,
    /// Rooms created
    pub rooms: usize,
    /// Enrollments created
    pub enrollments: usize,
}

impl Catalog {
    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing catalog {}", path.display()))
    }

    /// Check every entry against the schema constraints, and that names are not blank.
    pub fn validate(&self) -> anyhow::Result<()> {
        for entry in &self.ticket_types {
            anyhow::ensure!(!entry.name.trim().is_empty(), "ticket type with an empty name");
            anyhow::ensure!(entry.price >= 0, "ticket type {} has a negative price", entry.name);
        }
        for entry in &self.hotels {
            anyhow::ensure!(!entry.name.trim().is_empty(), "hotel with an empty name");
            for room in &entry.rooms {
                anyhow::ensure!(
                    room.capacity > 0,
                    "room {} of {} must have a positive capacity",
                    room.name,
                    entry.name
                );
            }
        }
        Ok(())
    }

    /// Write the catalog into `repo`.
    ///
    /// Nothing is written unless [`Catalog::validate`] passes.
    pub async fn apply<R>(&self, repo: &R, as_of: DateTime) -> anyhow::Result<SeedSummary>
    where
        R: CatalogRepository + TicketRepository + HotelRepository,
    {
        self.validate()?;

        let mut summary = SeedSummary::default();

        if repo.list_ticket_types().await?.is_empty() {
            for entry in &self.ticket_types {
                let ticket_type = repo
                    .create_ticket_type(
                        &entry.name,
                        entry.price,
                        entry.is_remote,
                        entry.includes_hotel,
                        as_of,
                    )
                    .await?;
                event!(Level::DEBUG, id = %ticket_type.id, name = %ticket_type.name, "created ticket type");
                summary.ticket_types += 1;
            }
        } else if !self.ticket_types.is_empty() {
            event!(Level::INFO, "ticket types already present, skipping");
        }

        if repo.list_hotels().await?.is_empty() {
            for entry in &self.hotels {
                let hotel = repo.create_hotel(&entry.name, &entry.image, as_of).await?;
                summary.hotels += 1;
                for room in &entry.rooms {
                    repo.create_room(hotel.id, &room.name, room.capacity, as_of)
                        .await
                        .with_context(|| format!("creating room {} of {}", room.name, entry.name))?
                        .with_context(|| format!("hotel {} disappeared while seeding", hotel.id))?;
                    summary.rooms += 1;
                }
                event!(Level::DEBUG, id = %hotel.id, name = %hotel.name, rooms = entry.rooms.len(), "created hotel");
            }
        } else if !self.hotels.is_empty() {
            event!(Level::INFO, "hotels already present, skipping");
        }

        for &user_id in &self.enrollments {
            if repo.get_enrollment(user_id).await?.is_none() {
                repo.create_enrollment(user_id, as_of).await?;
                summary.enrollments += 1;
            }
        }

        event!(
            Level::INFO,
            ticket_types = summary.ticket_types,
            hotels = summary.hotels,
            rooms = summary.rooms,
            enrollments = summary.enrollments,
            "catalog applied"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tix_sqlite::{Db, config::SqliteConfig};

    const CATALOG: &str = r#"{
        "ticketTypes": [
            { "name": "Online", "price": 100, "isRemote": true },
            { "name": "Full", "price": 600, "includesHotel": true }
        ],
        "hotels": [
            {
                "name": "Harbor View",
                "image": "https://example.com/harbor.png",
                "rooms": [{ "name": "101", "capacity": 2 }, { "name": "102", "capacity": 3 }]
            },
            { "name": "Annex", "image": "https://example.com/annex.png" }
        ],
        "enrollments": [1, 2]
    }"#;

    async fn db() -> Db {
        Db::open(&SqliteConfig::default()).await.unwrap()
    }

    #[test]
    fn flags_default_to_false() {
        let catalog: Catalog = serde_json::from_str(CATALOG).unwrap();
        assert!(catalog.ticket_types[0].is_remote);
        assert!(!catalog.ticket_types[0].includes_hotel);
        assert!(!catalog.ticket_types[1].is_remote);
        assert!(catalog.hotels[1].rooms.is_empty());
        assert_eq!(catalog.enrollments, vec![UserId(1), UserId(2)]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<Catalog>(r#"{ "hotel": [] }"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn applies_every_entry() {
        let db = db().await;
        let catalog: Catalog = serde_json::from_str(CATALOG).unwrap();

        let summary = catalog.apply(&db, DateTime::now()).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                ticket_types: 2,
                hotels: 2,
                rooms: 2,
                enrollments: 2,
            }
        );

        let hotels = db.list_hotels().await.unwrap();
        assert_eq!(hotels.len(), 2);
        let harbor = db.get_hotel_with_rooms(hotels[0].id).await.unwrap().unwrap();
        assert_eq!(harbor.rooms.len(), 2);
        assert!(db.get_enrollment(UserId(2)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn invalid_rooms_write_nothing() {
        let db = db().await;
        let mut catalog: Catalog = serde_json::from_str(CATALOG).unwrap();
        catalog.hotels[0].rooms[1].capacity = 0;

        assert!(catalog.apply(&db, DateTime::now()).await.is_err());
        assert!(db.list_hotels().await.unwrap().is_empty());
        assert!(db.list_ticket_types().await.unwrap().is_empty());

        // once fixed, the same database still takes the whole catalog
        catalog.hotels[0].rooms[1].capacity = 1;
        let summary = catalog.apply(&db, DateTime::now()).await.unwrap();
        assert_eq!(summary.rooms, 2);
    }

    #[tokio::test]
    async fn second_apply_writes_nothing() {
        let db = db().await;
        let catalog: Catalog = serde_json::from_str(CATALOG).unwrap();

        catalog.apply(&db, DateTime::now()).await.unwrap();
        let again = catalog.apply(&db, DateTime::now()).await.unwrap();

        assert_eq!(again, SeedSummary::default());
        assert_eq!(db.list_ticket_types().await.unwrap().len(), 2);
    }
}
