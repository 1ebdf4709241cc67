//! Visible-enrollment projection tests
//!
//! The projection must agree with the per-record view check for every actor
//! and every enrollment; these tests build a small campus and verify the
//! equivalence exhaustively.

use crate::common::fixtures::{self, EnrollmentFactory, ProfileFactory, SectionFactory};
use sistema_academico_rs::core::models::{ActorContext, Profile};
use sistema_academico_rs::services::EnrollmentService;
use sistema_academico_rs::storage::EnrollmentStore;
use uuid::Uuid;

struct Campus {
    service: EnrollmentService,
    alice: Profile,
    bob: Profile,
    prof_summers: Profile,
    prof_oak: Profile,
    coordinator: Profile,
    enrollment_ids: Vec<Uuid>,
}

/// Two professors with a section each; two students; Alice enrolls in both
/// sections, Bob only in the second.
async fn campus() -> Campus {
    let (service, store) = fixtures::service();

    let alice = ProfileFactory::student();
    let bob = ProfileFactory::student();
    let prof_summers = ProfileFactory::professor();
    let prof_oak = ProfileFactory::professor();
    let coordinator = ProfileFactory::coordinator();

    let algebra = SectionFactory::taught_by(&prof_summers);
    let compilers = SectionFactory::taught_by(&prof_oak);

    let enrollments = vec![
        EnrollmentFactory::of(&alice, &algebra),
        EnrollmentFactory::of(&alice, &compilers),
        EnrollmentFactory::of(&bob, &compilers),
    ];
    let enrollment_ids: Vec<Uuid> = enrollments.iter().map(|e| e.id()).collect();

    store.insert_section(algebra).await.unwrap();
    store.insert_section(compilers).await.unwrap();
    for enrollment in enrollments {
        store.insert_enrollment(enrollment).await.unwrap();
    }

    Campus {
        service,
        alice,
        bob,
        prof_summers,
        prof_oak,
        coordinator,
        enrollment_ids,
    }
}

async fn assert_projection_matches_view_check(campus: &Campus, actor: &ActorContext) {
    let visible = campus.service.list_visible(actor).await.unwrap();
    for &enrollment_id in &campus.enrollment_ids {
        let viewable = campus
            .service
            .can_be_viewed_by(actor, enrollment_id)
            .await
            .unwrap();
        assert_eq!(
            visible.contains(&enrollment_id),
            viewable,
            "projection and view check disagree on {}",
            enrollment_id
        );
    }
}

/// Test that each student sees exactly their own enrollments
#[tokio::test]
async fn test_students_see_own_enrollments() {
    let campus = campus().await;

    let alice = ActorContext::new(vec![campus.alice.clone()]);
    let visible = campus.service.list_visible(&alice).await.unwrap();
    assert_eq!(visible.len(), 2);
    assert!(visible.contains(&campus.enrollment_ids[0]));
    assert!(visible.contains(&campus.enrollment_ids[1]));

    let bob = ActorContext::new(vec![campus.bob.clone()]);
    let visible = campus.service.list_visible(&bob).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert!(visible.contains(&campus.enrollment_ids[2]));
}

/// Test that professors see the enrollments of their sections
#[tokio::test]
async fn test_professors_see_section_enrollments() {
    let campus = campus().await;

    let summers = ActorContext::new(vec![campus.prof_summers.clone()]);
    let visible = campus.service.list_visible(&summers).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert!(visible.contains(&campus.enrollment_ids[0]));

    let oak = ActorContext::new(vec![campus.prof_oak.clone()]);
    let visible = campus.service.list_visible(&oak).await.unwrap();
    assert_eq!(visible.len(), 2);
}

/// Test that a global-view holder and a superuser see everything
#[tokio::test]
async fn test_global_viewers_see_everything() {
    let campus = campus().await;

    for actor in [
        ActorContext::new(vec![campus.coordinator.clone()]),
        ActorContext::superuser(),
    ] {
        let visible = campus.service.list_visible(&actor).await.unwrap();
        assert_eq!(visible.len(), campus.enrollment_ids.len());
    }
}

/// Test that a dual-profile actor sees the union of both profiles' views
#[tokio::test]
async fn test_dual_profile_union() {
    let campus = campus().await;

    // Alice as a student plus Oak's teaching profile: Alice's two
    // enrollments union compilers' roster of two, overlapping in one.
    let actor = ActorContext::new(vec![campus.alice.clone(), campus.prof_oak.clone()]);
    let visible = campus.service.list_visible(&actor).await.unwrap();
    assert_eq!(visible.len(), 3);
}

/// Test the projection/view-check equivalence for every actor shape
#[tokio::test]
async fn test_projection_consistency() {
    let campus = campus().await;

    let actors = [
        ActorContext::new(vec![]),
        ActorContext::new(vec![campus.alice.clone()]),
        ActorContext::new(vec![campus.bob.clone()]),
        ActorContext::new(vec![campus.prof_summers.clone()]),
        ActorContext::new(vec![campus.prof_oak.clone()]),
        ActorContext::new(vec![campus.coordinator.clone()]),
        ActorContext::new(vec![campus.alice.clone(), campus.prof_oak.clone()]),
        ActorContext::superuser(),
    ];

    for actor in &actors {
        assert_projection_matches_view_check(&campus, actor).await;
    }
}

/// Test that an actor with no profiles sees nothing
#[tokio::test]
async fn test_empty_actor_sees_nothing() {
    let campus = campus().await;
    let actor = ActorContext::new(vec![]);
    let visible = campus.service.list_visible(&actor).await.unwrap();
    assert!(visible.is_empty());
}
