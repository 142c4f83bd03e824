//! Sort keys for list-returning repository operations
//!
//! Every list operation takes one of these explicitly; there is no implicit
//! "natural" order at the port boundary.

/// Ordering attribute for book listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookSort {
    #[default]
    Id,
    Title,
    AcquisitionDate,
}

/// Ordering attribute for member listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberSort {
    #[default]
    Id,
    Name,
}

/// Ordering attribute for loan listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoanSort {
    Id,
    /// Oldest loan first; ties fall back to id
    #[default]
    LoanDate,
}

/// Ordering attribute for reservation listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReservationSort {
    Id,
    /// Queue order: reservation date, then insertion sequence
    #[default]
    Queue,
}
