//! Authorization engine integration tests
//!
//! Exercises the decision properties through the public service surface:
//! superuser bypass, no-profile denial, permutation invariance, and the
//! object-scoped checks for dual-profile and wrong-professor actors.

use crate::common::fixtures::{self, ProfileFactory, SectionFactory};
use sistema_academico_rs::core::catalog::{
    GRADE_ENROLLMENT, MANAGE_ENROLLMENTS, MANAGE_USERS, VIEW_ALL_ENROLLMENTS,
    VIEW_OWN_ENROLLMENT, VIEW_SECTION_ENROLLMENTS,
};
use sistema_academico_rs::core::models::{ActorContext, Enrollment, Profile};
use sistema_academico_rs::storage::EnrollmentStore;
use uuid::Uuid;

const ALL_CODENAMES: [&str; 6] = [
    VIEW_OWN_ENROLLMENT,
    VIEW_SECTION_ENROLLMENTS,
    VIEW_ALL_ENROLLMENTS,
    GRADE_ENROLLMENT,
    MANAGE_ENROLLMENTS,
    MANAGE_USERS,
];

// ==================== Superuser Bypass ====================

/// Test that a superuser passes every permission check
#[tokio::test]
async fn test_superuser_bypass_on_every_permission() {
    let (service, _) = fixtures::service();
    let actor = ActorContext::superuser();

    for codename in ALL_CODENAMES {
        assert!(
            service.authorize(&actor, codename),
            "superuser denied {}",
            codename
        );
    }
}

/// Test that a superuser passes object-scoped checks too
#[tokio::test]
async fn test_superuser_bypass_on_object_checks() {
    let (service, store) = fixtures::service();
    let student = ProfileFactory::student();
    let professor = ProfileFactory::professor();
    let enrollment_id = fixtures::seed_enrollment(&store, &student, &professor).await;

    let actor = ActorContext::superuser();
    assert!(service.can_be_viewed_by(&actor, enrollment_id).await.unwrap());
    assert!(service
        .can_be_graded_by(&actor, enrollment_id, None)
        .await
        .unwrap());
}

// ==================== No-Profile Denial ====================

/// Test that an actor without profiles is denied everything
#[tokio::test]
async fn test_actor_without_profiles_is_denied() {
    let (service, _) = fixtures::service();
    let actor = ActorContext::new(vec![]);

    for codename in ALL_CODENAMES {
        assert!(!service.authorize(&actor, codename));
    }
}

/// Test that deactivated profiles contribute nothing
#[tokio::test]
async fn test_only_active_profiles_count() {
    let (service, _) = fixtures::service();
    let mut professor = ProfileFactory::professor();
    professor.deactivate();
    let actor = ActorContext::new(vec![professor]);

    assert!(!service.authorize(&actor, GRADE_ENROLLMENT));
}

// ==================== Permutation Invariance ====================

/// Test that profile order never changes an object-scoped decision
#[tokio::test]
async fn test_permutation_invariance_with_object_context() {
    let (service, store) = fixtures::service();
    let user_id = Uuid::new_v4();
    let student = ProfileFactory::student();
    let a = Profile::new(user_id, "PhD Student");
    let b = Profile::new(user_id, "Professor");
    let c = Profile::new(user_id, "Academic Coordinator");

    let section = SectionFactory::taught_by(&b);
    let enrollment = Enrollment::new(student.id(), section.id());
    let enrollment_id = enrollment.id();
    store.insert_section(section).await.unwrap();
    store.insert_enrollment(enrollment).await.unwrap();

    let orders = [
        vec![a.clone(), b.clone(), c.clone()],
        vec![c.clone(), b.clone(), a.clone()],
        vec![b.clone(), a.clone(), c.clone()],
        vec![c.clone(), a.clone(), b.clone()],
    ];

    let mut view_results = Vec::new();
    let mut grade_results = Vec::new();
    for profiles in &orders {
        let actor = ActorContext::new(profiles.clone());
        view_results.push(service.can_be_viewed_by(&actor, enrollment_id).await.unwrap());
        grade_results.push(
            service
                .can_be_graded_by(&actor, enrollment_id, None)
                .await
                .unwrap(),
        );
    }

    assert!(view_results.iter().all(|&r| r));
    assert!(grade_results.iter().all(|&r| r));
}

// ==================== Object-Scoped Scenarios ====================

/// Test the dual-profile actor: student in the enrollment, professor of its
/// section
#[tokio::test]
async fn test_dual_profile_actor() {
    let (service, store) = fixtures::service();
    let user_id = Uuid::new_v4();
    let student_profile = Profile::new(user_id, "PhD Student");
    let professor_profile = Profile::new(user_id, "Professor");

    let section = SectionFactory::taught_by(&professor_profile);
    let enrollment = Enrollment::new(student_profile.id(), section.id());
    let enrollment_id = enrollment.id();
    store.insert_section(section).await.unwrap();
    store.insert_enrollment(enrollment).await.unwrap();

    let actor = ActorContext::new(vec![student_profile, professor_profile.clone()]);

    assert!(service.can_be_viewed_by(&actor, enrollment_id).await.unwrap());
    assert!(service
        .can_be_graded_by(&actor, enrollment_id, None)
        .await
        .unwrap());

    let graded = service
        .set_grade(&actor, enrollment_id, 12.0, None)
        .await
        .unwrap();
    assert_eq!(graded.graded_by, Some(professor_profile.id()));
}

/// Test that a professor of a different section cannot view or grade
#[tokio::test]
async fn test_wrong_professor_is_denied() {
    let (service, store) = fixtures::service();
    let student = ProfileFactory::student();
    let professor = ProfileFactory::professor();
    let other_professor = ProfileFactory::with_role("Adjunct Professor");
    let enrollment_id = fixtures::seed_enrollment(&store, &student, &professor).await;

    // The other professor teaches their own, unrelated section
    let other_section = SectionFactory::taught_by(&other_professor);
    store.insert_section(other_section).await.unwrap();

    let actor = ActorContext::new(vec![other_professor]);
    assert!(!service.can_be_viewed_by(&actor, enrollment_id).await.unwrap());
    assert!(!service
        .can_be_graded_by(&actor, enrollment_id, None)
        .await
        .unwrap());
}

/// Test that the profile hint pins the check to one profile
#[tokio::test]
async fn test_profile_hint_disambiguates() {
    let (service, store) = fixtures::service();
    let user_id = Uuid::new_v4();
    let ta = Profile::new(user_id, "Teaching Assistant");
    let assoc = Profile::new(user_id, "Associate Professor");
    let student = ProfileFactory::student();

    let section = SectionFactory::taught_by(&assoc);
    let enrollment = Enrollment::new(student.id(), section.id());
    let enrollment_id = enrollment.id();
    store.insert_section(section).await.unwrap();
    store.insert_enrollment(enrollment).await.unwrap();

    let actor = ActorContext::new(vec![ta.clone(), assoc.clone()]);

    assert!(service
        .can_be_graded_by(&actor, enrollment_id, Some(assoc.id()))
        .await
        .unwrap());
    assert!(!service
        .can_be_graded_by(&actor, enrollment_id, Some(ta.id()))
        .await
        .unwrap());
}
