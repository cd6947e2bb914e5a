use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use tokio::sync::RwLock;

use compass_server::{
    errors::{AppError, AppResult},
    models::domain::{
        Answer, AnswerOption, Assessment, AssessmentStatus, Career, CareerSpec, CategoryCode,
        Question, QuestionSpec,
    },
    repositories::{AnswerRepository, AssessmentRepository, CareerRepository, QuestionRepository},
    services::{selection::ASSESSMENT_SIZE, AssessmentService, Requester},
};

struct InMemoryAssessmentRepository {
    items: RwLock<HashMap<i64, Assessment>>,
    next_id: AtomicI64,
}

impl InMemoryAssessmentRepository {
    fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn create(
        &self,
        user_id: i64,
        selected_question_ids: Vec<i64>,
    ) -> AppResult<Assessment> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let assessment = Assessment::new(id, user_id, selected_question_ids);
        self.items.write().await.insert(id, assessment.clone());
        Ok(assessment)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Assessment>> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Assessment>> {
        let items = self.items.read().await;
        let mut own: Vec<Assessment> = items
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        own.sort_by(|a, b| b.started_at.cmp(&a.started_at).then(b.id.cmp(&a.id)));
        Ok(own)
    }

    async fn update_current_index(&self, id: i64, index: i64) -> AppResult<Assessment> {
        let mut items = self.items.write().await;
        let assessment = items
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Assessment with id '{}' not found", id)))?;
        assessment.current_question_index = index;
        Ok(assessment.clone())
    }

    async fn set_completed(
        &self,
        id: i64,
        scores: BTreeMap<String, i64>,
    ) -> AppResult<Assessment> {
        let mut items = self.items.write().await;
        let assessment = items
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Assessment with id '{}' not found", id)))?;
        assessment.status = AssessmentStatus::Completed;
        assessment.completed_at = Some(Utc::now());
        assessment.scores = Some(scores);
        Ok(assessment.clone())
    }
}

struct InMemoryAnswerRepository {
    items: RwLock<Vec<Answer>>,
    next_id: AtomicI64,
}

impl InMemoryAnswerRepository {
    fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl AnswerRepository for InMemoryAnswerRepository {
    async fn upsert(
        &self,
        assessment_id: i64,
        question_id: i64,
        option_id: i64,
    ) -> AppResult<Answer> {
        let mut items = self.items.write().await;
        if let Some(existing) = items
            .iter_mut()
            .find(|a| a.assessment_id == assessment_id && a.question_id == question_id)
        {
            existing.option_id = option_id;
            return Ok(existing.clone());
        }

        let answer = Answer {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            assessment_id,
            question_id,
            option_id,
        };
        items.push(answer.clone());
        Ok(answer)
    }

    async fn list_for_assessment(&self, assessment_id: i64) -> AppResult<Vec<Answer>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|a| a.assessment_id == assessment_id)
            .cloned()
            .collect())
    }
}

struct InMemoryQuestionRepository {
    items: RwLock<HashMap<i64, Question>>,
}

impl InMemoryQuestionRepository {
    fn with_catalog(catalog: Vec<Question>) -> Self {
        Self {
            items: RwLock::new(catalog.into_iter().map(|q| (q.id, q)).collect()),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn list_active(&self) -> AppResult<Vec<Question>> {
        let items = self.items.read().await;
        let mut active: Vec<Question> =
            items.values().filter(|q| q.is_active).cloned().collect();
        active.sort_by_key(|q| q.display_order);
        Ok(active)
    }

    async fn list_by_ids(&self, ids: Vec<i64>) -> AppResult<Vec<Question>> {
        let items = self.items.read().await;
        Ok(ids.into_iter().filter_map(|id| items.get(&id).cloned()).collect())
    }

    async fn create(&self, _spec: QuestionSpec) -> AppResult<Question> {
        unimplemented!("not exercised by the assessment flow")
    }

    async fn update(&self, _id: i64, _spec: QuestionSpec) -> AppResult<Question> {
        unimplemented!("not exercised by the assessment flow")
    }

    async fn delete(&self, _id: i64) -> AppResult<()> {
        unimplemented!("not exercised by the assessment flow")
    }
}

struct InMemoryCareerRepository {
    items: RwLock<Vec<Career>>,
}

impl InMemoryCareerRepository {
    fn with_careers(careers: Vec<Career>) -> Self {
        Self {
            items: RwLock::new(careers),
        }
    }
}

#[async_trait]
impl CareerRepository for InMemoryCareerRepository {
    async fn list(&self) -> AppResult<Vec<Career>> {
        Ok(self.items.read().await.clone())
    }

    async fn create(&self, _spec: CareerSpec) -> AppResult<Career> {
        unimplemented!("not exercised by the assessment flow")
    }

    async fn update(&self, _id: i64, _spec: CareerSpec) -> AppResult<Career> {
        unimplemented!("not exercised by the assessment flow")
    }

    async fn delete(&self, _id: i64) -> AppResult<()> {
        unimplemented!("not exercised by the assessment flow")
    }
}

fn likert_options(question_id: i64) -> Vec<AnswerOption> {
    (1..=5)
        .map(|w| AnswerOption {
            id: question_id * 100 + i64::from(w),
            text: format!("Option {}", w),
            weight: w,
            display_order: w,
        })
        .collect()
}

fn question(id: i64, category: CategoryCode) -> Question {
    Question {
        id,
        text: format!("Statement {}", id),
        section: category.section(),
        category,
        is_active: true,
        display_order: id as i32,
        options: likert_options(id),
        created_at: Some(Utc::now()),
    }
}

fn full_catalog(per_category: usize) -> Vec<Question> {
    let mut catalog = Vec::new();
    let mut next_id = 1;
    for code in CategoryCode::ALL {
        for _ in 0..per_category {
            catalog.push(question(next_id, code));
            next_id += 1;
        }
    }
    catalog
}

fn sample_careers() -> Vec<Career> {
    vec![
        Career {
            id: 1,
            title: "Software Engineer".to_string(),
            description: "Designs and builds software systems.".to_string(),
            stream: "Science".to_string(),
            required_codes: vec![CategoryCode::R, CategoryCode::I],
            typical_degree: None,
        },
        Career {
            id: 2,
            title: "Graphic Designer".to_string(),
            description: "Creates visual concepts.".to_string(),
            stream: "Arts".to_string(),
            required_codes: vec![CategoryCode::A],
            typical_degree: None,
        },
    ]
}

fn build_service(catalog: Vec<Question>, careers: Vec<Career>) -> AssessmentService {
    AssessmentService::new(
        Arc::new(InMemoryAssessmentRepository::new()),
        Arc::new(InMemoryAnswerRepository::new()),
        Arc::new(InMemoryQuestionRepository::with_catalog(catalog)),
        Arc::new(InMemoryCareerRepository::with_careers(careers)),
        StdRng::seed_from_u64(42),
    )
}

fn owner() -> Requester {
    Requester {
        user_id: 7,
        is_admin: false,
    }
}

fn option_with_weight(question: &Question, weight: i32) -> i64 {
    question
        .options
        .iter()
        .find(|o| o.weight == weight)
        .expect("weight on the 1-5 scale")
        .id
}

#[tokio::test]
async fn starting_draws_forty_unique_questions_meeting_every_quota() {
    let catalog = full_catalog(6);
    let by_id: HashMap<i64, CategoryCode> =
        catalog.iter().map(|q| (q.id, q.category)).collect();
    let service = build_service(catalog, sample_careers());

    let started = service.start_assessment(7).await.unwrap();

    assert_eq!(started.assessment.status, AssessmentStatus::InProgress);
    assert_eq!(started.assessment.current_question_index, 0);
    assert_eq!(started.questions.len(), ASSESSMENT_SIZE);

    let ids = &started.assessment.selected_question_ids;
    assert_eq!(ids.len(), ASSESSMENT_SIZE);
    let unique: std::collections::HashSet<i64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ASSESSMENT_SIZE);

    for code in CategoryCode::ALL {
        let drawn = ids.iter().filter(|id| by_id[id] == code).count();
        assert_eq!(drawn, code.quota(), "quota for {:?}", code);
    }
}

#[tokio::test]
async fn question_order_is_frozen_across_fetches() {
    let service = build_service(full_catalog(6), sample_careers());
    let started = service.start_assessment(7).await.unwrap();

    let first = service
        .get_assessment_view(started.assessment.id, &owner())
        .await
        .unwrap();
    let second = service
        .get_assessment_view(started.assessment.id, &owner())
        .await
        .unwrap();

    let order: Vec<i64> = first.questions.iter().map(|q| q.id).collect();
    assert_eq!(order, started.assessment.selected_question_ids);
    assert_eq!(
        order,
        second.questions.iter().map(|q| q.id).collect::<Vec<i64>>()
    );
}

#[tokio::test]
async fn resubmitting_a_question_keeps_a_single_row_with_the_last_option() {
    let service = build_service(full_catalog(6), sample_careers());
    let started = service.start_assessment(7).await.unwrap();
    let id = started.assessment.id;
    let target = &started.questions[0];

    service
        .record_answer(id, &owner(), target.id, option_with_weight(target, 2))
        .await
        .unwrap();
    service
        .record_answer(id, &owner(), target.id, option_with_weight(target, 5))
        .await
        .unwrap();

    let view = service.get_assessment_view(id, &owner()).await.unwrap();
    assert_eq!(view.answers.len(), 1);
    assert_eq!(view.answers[0].option.weight, 5);
}

#[tokio::test]
async fn progress_moves_in_both_directions_within_bounds() {
    let service = build_service(full_catalog(6), sample_careers());
    let started = service.start_assessment(7).await.unwrap();
    let id = started.assessment.id;

    let forward = service.record_progress(id, &owner(), 5).await.unwrap();
    assert_eq!(forward.current_question_index, 5);

    let backward = service.record_progress(id, &owner(), 2).await.unwrap();
    assert_eq!(backward.current_question_index, 2);

    let past_end = service
        .record_progress(id, &owner(), ASSESSMENT_SIZE as i64 + 1)
        .await;
    assert!(matches!(past_end, Err(AppError::ValidationError(_))));

    // The position one past the last question is legal.
    let at_end = service
        .record_progress(id, &owner(), ASSESSMENT_SIZE as i64)
        .await
        .unwrap();
    assert_eq!(at_end.current_question_index, ASSESSMENT_SIZE as i64);
}

#[tokio::test]
async fn finishing_freezes_scores_and_recommends_matching_careers() {
    let service = build_service(full_catalog(6), sample_careers());
    let started = service.start_assessment(7).await.unwrap();
    let id = started.assessment.id;

    let r_question = started
        .questions
        .iter()
        .find(|q| q.category == CategoryCode::R)
        .unwrap();
    let i_question = started
        .questions
        .iter()
        .find(|q| q.category == CategoryCode::I)
        .unwrap();

    service
        .record_answer(id, &owner(), r_question.id, option_with_weight(r_question, 5))
        .await
        .unwrap();
    service
        .record_answer(id, &owner(), i_question.id, option_with_weight(i_question, 4))
        .await
        .unwrap();

    let outcome = service.finish_assessment(id, &owner()).await.unwrap();

    assert_eq!(outcome.assessment.status, AssessmentStatus::Completed);
    assert!(outcome.assessment.completed_at.is_some());

    let scores = outcome.assessment.scores.clone().unwrap();
    assert_eq!(scores.len(), 12);
    assert_eq!(scores["R"], 5);
    assert_eq!(scores["I"], 4);
    assert_eq!(scores["A"], 0);

    // Top two interest codes are R and I, which only matches the engineer.
    assert_eq!(outcome.recommendations.len(), 1);
    assert_eq!(outcome.recommendations[0].title, "Software Engineer");
}

#[tokio::test]
async fn finishing_twice_serves_the_frozen_scores() {
    let service = build_service(full_catalog(6), sample_careers());
    let started = service.start_assessment(7).await.unwrap();
    let id = started.assessment.id;

    let target = &started.questions[0];
    service
        .record_answer(id, &owner(), target.id, option_with_weight(target, 3))
        .await
        .unwrap();

    let first = service.finish_assessment(id, &owner()).await.unwrap();

    // A late answer must not change the already-frozen result.
    service
        .record_answer(id, &owner(), target.id, option_with_weight(target, 5))
        .await
        .unwrap();

    let second = service.finish_assessment(id, &owner()).await.unwrap();
    assert_eq!(first.assessment.scores, second.assessment.scores);
    assert_eq!(
        first.assessment.completed_at,
        second.assessment.completed_at
    );
}

#[tokio::test]
async fn foreign_users_are_rejected_but_admins_pass() {
    let service = build_service(full_catalog(6), sample_careers());
    let started = service.start_assessment(7).await.unwrap();
    let id = started.assessment.id;

    let stranger = Requester {
        user_id: 8,
        is_admin: false,
    };
    let denied = service.get_assessment_view(id, &stranger).await;
    assert!(matches!(denied, Err(AppError::Forbidden(_))));

    let admin = Requester {
        user_id: 8,
        is_admin: true,
    };
    assert!(service.get_assessment_view(id, &admin).await.is_ok());
}

#[tokio::test]
async fn answers_outside_the_selection_are_rejected() {
    let catalog = full_catalog(6);
    let service = build_service(catalog.clone(), sample_careers());
    let started = service.start_assessment(7).await.unwrap();
    let id = started.assessment.id;

    let outsider = catalog
        .iter()
        .find(|q| !started.assessment.selected_question_ids.contains(&q.id))
        .expect("catalog is larger than one selection");

    let result = service
        .record_answer(id, &owner(), outsider.id, option_with_weight(outsider, 3))
        .await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn short_categories_contribute_what_they_have() {
    let mut catalog = full_catalog(6);
    let mut kept_one = false;
    catalog.retain(|q| {
        if q.category != CategoryCode::Verbal {
            return true;
        }
        !std::mem::replace(&mut kept_one, true)
    });

    let service = build_service(catalog, sample_careers());
    let started = service.start_assessment(7).await.unwrap();

    assert_eq!(started.questions.len(), ASSESSMENT_SIZE - 1);
}

#[tokio::test]
async fn empty_catalog_still_starts_and_finishes() {
    let service = build_service(vec![], sample_careers());
    let started = service.start_assessment(7).await.unwrap();

    assert!(started.questions.is_empty());

    let outcome = service
        .finish_assessment(started.assessment.id, &owner())
        .await
        .unwrap();
    let scores = outcome.assessment.scores.unwrap();
    assert_eq!(scores.len(), 12);
    assert!(scores.values().all(|s| *s == 0));
}

#[tokio::test]
async fn assessments_are_listed_most_recent_first() {
    let service = build_service(full_catalog(6), sample_careers());
    let first = service.start_assessment(7).await.unwrap();
    let second = service.start_assessment(7).await.unwrap();
    service.start_assessment(8).await.unwrap();

    let listed = service.list_for_user(7).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.assessment.id);
    assert_eq!(listed[1].id, first.assessment.id);
}
