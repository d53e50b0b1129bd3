use chrono::Utc;
use cicerone_client::apis::{GuidesApi, TripsApi};
use cicerone_client::mock::{MockGuidesClient, MockTripsClient};
use cicerone_core::models::guide::{
    ApplicationStatus, GuideApplication, ReviewApplicationRequest,
};
use cicerone_core::models::link::Linked;
use cicerone_core::models::trip::{GetTripResponse, Trip};
use cicerone_core::schedule::ScheduleSet;
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn sample_trip(city: &str) -> Trip {
    Trip {
        id: Uuid::new_v4(),
        guide: Linked::Id(Uuid::new_v4()),
        city: city.to_string(),
        title: "Alfama at dawn".to_string(),
        description: "A quiet walk before the crowds arrive".to_string(),
        price: 35,
        schedule: ScheduleSet::new(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_list_trips_filters_by_city() {
    let mut api = MockTripsClient::new();
    api.expect_list_trips()
        .withf(|city| city.as_deref() == Some("Lisbon"))
        .times(1)
        .returning(|_| Ok(vec![sample_trip("Lisbon")]));

    let trips = api
        .list_trips(Some("Lisbon".to_string()))
        .await
        .expect("listing succeeds");

    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].city, "Lisbon");
}

#[tokio::test]
async fn test_get_trip_returns_schedule() {
    let trip = sample_trip("Lisbon");
    let trip_id = trip.id;

    let mut api = MockTripsClient::new();
    api.expect_get_trip().times(1).returning(move |id| {
        let trip = sample_trip("Lisbon");
        Ok(GetTripResponse {
            id,
            guide: trip.guide,
            city: trip.city,
            title: trip.title,
            description: trip.description,
            price: trip.price,
            schedule: trip.schedule,
            created_at: trip.created_at,
        })
    });

    let response = api.get_trip(trip_id).await.expect("fetch succeeds");

    assert_eq!(response.id, trip_id);
    assert!(response.schedule.is_empty());
}

#[tokio::test]
async fn test_admin_approves_application() {
    let application_id = Uuid::new_v4();

    let mut api = MockGuidesClient::new();
    api.expect_review_application()
        .withf(move |id, request| {
            *id == application_id && request.status == ApplicationStatus::Approved
        })
        .times(1)
        .returning(|id, request| {
            Ok(GuideApplication {
                id,
                applicant_name: "Marco".to_string(),
                city: "Rome".to_string(),
                motivation: "Licensed guide since 2019".to_string(),
                status: request.status,
                submitted_at: Utc::now(),
            })
        });

    let reviewed = api
        .review_application(
            application_id,
            ReviewApplicationRequest {
                status: ApplicationStatus::Approved,
                note: None,
            },
        )
        .await
        .expect("review succeeds");

    assert_eq!(reviewed.status, ApplicationStatus::Approved);
}
