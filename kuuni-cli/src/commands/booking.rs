//! Booking command handlers
//!
//! Handles the admin side of booking requests: listing the queue, viewing a
//! request, moving it through its handling status, and deletion.

use anyhow::{Result, anyhow};
use clap::Subcommand;
use colored::*;
use kuuni_core::domain::booking::{BookingRequest, BookingStatus};
use kuuni_client::KuuniClient;

use crate::commands::client;
use crate::config::Config;
use crate::id_resolver::{IdOrPrefix, resolve_booking_id};

/// Booking subcommands
#[derive(Subcommand)]
pub enum BookingCommands {
    /// List booking requests
    List {
        /// Only show bookings in this status (pending, contacted, confirmed, cancelled)
        #[arg(long)]
        status: Option<String>,
    },
    /// Get booking request details
    Get {
        /// Booking ID or unambiguous prefix
        id: String,
    },
    /// Set the handling status of a booking request
    SetStatus {
        /// Booking ID or unambiguous prefix
        id: String,

        /// New status (pending, contacted, confirmed, cancelled)
        status: String,
    },
    /// Delete a booking request
    Delete {
        /// Booking ID or unambiguous prefix
        id: String,
    },
}

/// Handle booking commands
pub async fn handle_booking_command(command: BookingCommands, config: &Config) -> Result<()> {
    let client = client(config);

    match command {
        BookingCommands::List { status } => list_bookings(&client, status).await,
        BookingCommands::Get { id } => get_booking(&client, &id).await,
        BookingCommands::SetStatus { id, status } => set_status(&client, &id, &status).await,
        BookingCommands::Delete { id } => delete_booking(&client, &id).await,
    }
}

/// Parse a status argument into a BookingStatus
fn parse_status(s: &str) -> Result<BookingStatus> {
    match s {
        "pending" => Ok(BookingStatus::Pending),
        "contacted" => Ok(BookingStatus::Contacted),
        "confirmed" => Ok(BookingStatus::Confirmed),
        "cancelled" => Ok(BookingStatus::Cancelled),
        other => Err(anyhow!(
            "Unknown status '{}' (expected pending, contacted, confirmed, or cancelled)",
            other
        )),
    }
}

/// List booking requests
async fn list_bookings(client: &KuuniClient, status: Option<String>) -> Result<()> {
    let status = status.as_deref().map(parse_status).transpose()?;
    let bookings = client.list_bookings(status).await?;

    if bookings.is_empty() {
        println!("{}", "No booking requests found.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} booking request(s):", bookings.len()).bold()
        );
        println!();
        for booking in bookings {
            print_booking_summary(&booking);
        }
    }

    Ok(())
}

/// Get and display a single booking request
async fn get_booking(client: &KuuniClient, id: &str) -> Result<()> {
    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_booking_id(client, &id_or_prefix).await?;

    let booking = client.get_booking(uuid).await?;

    print_booking_details(&booking);

    Ok(())
}

/// Set the handling status of a booking request
async fn set_status(client: &KuuniClient, id: &str, status: &str) -> Result<()> {
    let status = parse_status(status)?;

    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_booking_id(client, &id_or_prefix).await?;

    let booking = client.set_booking_status(uuid, status).await?;

    println!(
        "{}",
        format!("✓ Booking {} is now {}", booking.id, booking.status)
            .green()
            .bold()
    );

    Ok(())
}

/// Delete a booking request
async fn delete_booking(client: &KuuniClient, id: &str) -> Result<()> {
    let id_or_prefix = IdOrPrefix::parse(id);
    let uuid = resolve_booking_id(client, &id_or_prefix).await?;

    client.delete_booking(uuid).await?;

    println!(
        "{}",
        format!("✓ Booking {} deleted successfully!", uuid)
            .green()
            .bold()
    );

    Ok(())
}

// =============================================================================
// Display Helpers
// =============================================================================

fn status_color(status: BookingStatus) -> ColoredString {
    let label = status.to_string();
    match status {
        BookingStatus::Pending => label.yellow(),
        BookingStatus::Contacted => label.blue(),
        BookingStatus::Confirmed => label.green(),
        BookingStatus::Cancelled => label.red(),
    }
}

fn print_booking_summary(booking: &BookingRequest) {
    println!(
        "  {} {} [{}]",
        booking.id.to_string().cyan(),
        booking.name.bold(),
        status_color(booking.status)
    );
    println!(
        "    {} · {} person(s) · {}",
        booking.experience_title.dimmed(),
        booking.number_of_people.to_string().dimmed(),
        booking.preferred_date.dimmed()
    );
}

fn print_booking_details(booking: &BookingRequest) {
    println!("  ID:         {}", booking.id.to_string().cyan());
    println!("  Experience: {}", booking.experience_title.bold());
    println!("  Name:       {}", booking.name);
    println!("  Email:      {}", booking.email);
    println!("  Phone:      {}", booking.phone);
    println!("  People:     {}", booking.number_of_people);
    println!("  Date:       {}", booking.preferred_date);
    println!("  Status:     {}", status_color(booking.status));
    println!("  Created:    {}", booking.created_at);
    if !booking.message.is_empty() {
        println!("  {}", booking.message.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_labels() {
        assert_eq!(parse_status("pending").unwrap(), BookingStatus::Pending);
        assert_eq!(parse_status("cancelled").unwrap(), BookingStatus::Cancelled);
    }

    #[test]
    fn test_parse_unknown_status() {
        assert!(parse_status("archived").is_err());
    }
}
