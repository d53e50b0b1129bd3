use async_trait::async_trait;
use cicerone_core::errors::TourResult;
use cicerone_core::models::booking::{Booking, CreateBookingRequest, CreateBookingResponse};
use cicerone_core::models::city::City;
use cicerone_core::models::guide::{
    ApplicationStatus, CreateApplicationRequest, CreatePostRequest, CreateReviewRequest, Guide,
    GuideApplication, Post, Review, ReviewApplicationRequest,
};
use cicerone_core::models::trip::{
    CreateTripRequest, CreateTripResponse, GetTripResponse, Trip, UpdateTripRequest,
    UpdateTripResponse,
};
use uuid::Uuid;

/// Trip endpoints: browsing, authoring, and explicit updates.
#[async_trait]
pub trait TripsApi: Send + Sync {
    async fn create_trip(&self, request: CreateTripRequest) -> TourResult<CreateTripResponse>;

    async fn get_trip(&self, id: Uuid) -> TourResult<GetTripResponse>;

    async fn update_trip(
        &self,
        id: Uuid,
        request: UpdateTripRequest,
    ) -> TourResult<UpdateTripResponse>;

    /// Trips visible to travelers, optionally filtered by city.
    async fn list_trips(&self, city: Option<String>) -> TourResult<Vec<Trip>>;
}

/// Booking endpoints for travelers and for guides reviewing requests.
#[async_trait]
pub trait BookingsApi: Send + Sync {
    async fn create_booking(&self, request: CreateBookingRequest)
        -> TourResult<CreateBookingResponse>;

    async fn list_bookings_for_trip(&self, trip_id: Uuid) -> TourResult<Vec<Booking>>;

    async fn list_my_bookings(&self) -> TourResult<Vec<Booking>>;

    async fn cancel_booking(&self, id: Uuid) -> TourResult<()>;
}

/// Guide profiles, posts, reviews, and the admin application queue.
#[async_trait]
pub trait GuidesApi: Send + Sync {
    async fn list_cities(&self) -> TourResult<Vec<City>>;

    async fn list_guides(&self, city: Option<String>) -> TourResult<Vec<Guide>>;

    async fn get_guide(&self, id: Uuid) -> TourResult<Guide>;

    async fn submit_application(
        &self,
        request: CreateApplicationRequest,
    ) -> TourResult<GuideApplication>;

    async fn list_applications(
        &self,
        status: Option<ApplicationStatus>,
    ) -> TourResult<Vec<GuideApplication>>;

    async fn review_application(
        &self,
        id: Uuid,
        request: ReviewApplicationRequest,
    ) -> TourResult<GuideApplication>;

    async fn create_post(&self, request: CreatePostRequest) -> TourResult<Post>;

    async fn list_posts(&self, guide_id: Uuid) -> TourResult<Vec<Post>>;

    async fn create_review(&self, request: CreateReviewRequest) -> TourResult<Review>;

    async fn list_reviews(&self, trip_id: Uuid) -> TourResult<Vec<Review>>;
}
