mod property_repository;
mod repository_error;
mod reservation_repository;
mod user_repository;

pub use property_repository::PropertyRepository;
pub use repository_error::RepositoryError;
pub use reservation_repository::ReservationRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use property_repository::MockPropertyRepository;
#[cfg(test)]
pub use reservation_repository::MockReservationRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
