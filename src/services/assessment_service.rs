use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use tokio::sync::Mutex;

use crate::{
    auth::AuthenticatedUser,
    errors::{AppError, AppResult},
    models::{
        domain::{Answer, AnswerRow, Assessment, Career},
        dto::response::{AssessmentOutcome, AssessmentView, StartedAssessment},
    },
    repositories::{
        AnswerRepository, AssessmentRepository, CareerRepository, QuestionRepository,
    },
    services::{scoring, selection},
};

/// Caller identity as seen by the service layer. Admins may read and mutate
/// any assessment; everyone else only their own.
#[derive(Debug, Clone, Copy)]
pub struct Requester {
    pub user_id: i64,
    pub is_admin: bool,
}

impl From<&AuthenticatedUser> for Requester {
    fn from(auth: &AuthenticatedUser) -> Self {
        Requester {
            user_id: auth.user_id,
            is_admin: auth.is_admin(),
        }
    }
}

/// Orchestrates the assessment lifecycle: stratified question selection at
/// creation, resumable progress, validated answer upserts, and one-way
/// completion with frozen scores and career matching.
pub struct AssessmentService {
    assessments: Arc<dyn AssessmentRepository>,
    answers: Arc<dyn AnswerRepository>,
    questions: Arc<dyn QuestionRepository>,
    careers: Arc<dyn CareerRepository>,
    rng: Mutex<StdRng>,
}

impl AssessmentService {
    pub fn new(
        assessments: Arc<dyn AssessmentRepository>,
        answers: Arc<dyn AnswerRepository>,
        questions: Arc<dyn QuestionRepository>,
        careers: Arc<dyn CareerRepository>,
        rng: StdRng,
    ) -> Self {
        Self {
            assessments,
            answers,
            questions,
            careers,
            rng: Mutex::new(rng),
        }
    }

    /// Creates a new assessment for the user with a freshly drawn question
    /// selection. An empty catalog still creates an assessment; it simply
    /// has zero questions.
    pub async fn start_assessment(&self, user_id: i64) -> AppResult<StartedAssessment> {
        let catalog = self.questions.list_active().await?;

        let selected = {
            let mut rng = self.rng.lock().await;
            selection::select_assessment_questions(&catalog, &mut *rng)
        };

        let assessment = self.assessments.create(user_id, selected.clone()).await?;
        let questions = self.questions.list_by_ids(selected).await?;

        log::info!(
            "Started assessment {} for user {} with {} questions",
            assessment.id,
            user_id,
            questions.len()
        );

        Ok(StartedAssessment {
            assessment,
            questions,
        })
    }

    pub async fn list_for_user(&self, user_id: i64) -> AppResult<Vec<Assessment>> {
        self.assessments.list_by_user(user_id).await
    }

    /// The assessment with its questions in frozen order and all answers
    /// recorded so far.
    pub async fn get_assessment_view(
        &self,
        id: i64,
        requester: &Requester,
    ) -> AppResult<AssessmentView> {
        let assessment = self.load_owned(id, requester).await?;

        let questions = self
            .questions
            .list_by_ids(assessment.selected_question_ids.clone())
            .await?;
        let answers = self.load_answer_rows(id).await?;

        Ok(AssessmentView {
            assessment,
            questions,
            answers,
        })
    }

    /// Moves the resumable cursor. Both directions are allowed; the index
    /// must stay within `0..=len` of the selected question list.
    pub async fn record_progress(
        &self,
        id: i64,
        requester: &Requester,
        index: i64,
    ) -> AppResult<Assessment> {
        let assessment = self.load_owned(id, requester).await?;

        let len = assessment.selected_question_ids.len() as i64;
        if index < 0 || index > len {
            return Err(AppError::ValidationError(format!(
                "Question index {} is out of range 0..={}",
                index, len
            )));
        }

        self.assessments.update_current_index(id, index).await
    }

    /// Records (or overwrites) the answer for one question. The question
    /// must be part of this assessment's selection and the option must
    /// belong to that question.
    pub async fn record_answer(
        &self,
        id: i64,
        requester: &Requester,
        question_id: i64,
        option_id: i64,
    ) -> AppResult<Answer> {
        let assessment = self.load_owned(id, requester).await?;

        if !assessment.selected_question_ids.contains(&question_id) {
            return Err(AppError::ValidationError(format!(
                "Question {} is not part of assessment {}",
                question_id, id
            )));
        }

        let question = self
            .questions
            .list_by_ids(vec![question_id])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::NotFound(format!("Question with id '{}' not found", question_id))
            })?;

        if question.option(option_id).is_none() {
            return Err(AppError::ValidationError(format!(
                "Option {} does not belong to question {}",
                option_id, question_id
            )));
        }

        self.answers.upsert(id, question_id, option_id).await
    }

    /// Completes the assessment: aggregates the recorded answers into the
    /// per-category score map, freezes it, and matches careers against the
    /// top two interest codes. Finishing an already-completed assessment is
    /// a no-op that serves the cached scores, so double submission cannot
    /// change the result.
    pub async fn finish_assessment(
        &self,
        id: i64,
        requester: &Requester,
    ) -> AppResult<AssessmentOutcome> {
        let assessment = self.load_owned(id, requester).await?;

        if assessment.is_completed() {
            let doc = assessment.scores.clone().unwrap_or_default();
            let scores = scoring::from_score_doc(&doc);
            let recommendations = self.recommendations_for(&scores).await?;
            return Ok(AssessmentOutcome {
                assessment,
                recommendations,
            });
        }

        let rows = self.load_answer_rows(id).await?;
        let scores = scoring::compute_scores(&rows);

        let assessment = self
            .assessments
            .set_completed(id, scoring::to_score_doc(&scores))
            .await?;
        let recommendations = self.recommendations_for(&scores).await?;

        log::info!(
            "Completed assessment {} with {} recommendations",
            id,
            recommendations.len()
        );

        Ok(AssessmentOutcome {
            assessment,
            recommendations,
        })
    }

    async fn load_owned(&self, id: i64, requester: &Requester) -> AppResult<Assessment> {
        let assessment = self
            .assessments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Assessment with id '{}' not found", id)))?;

        if assessment.user_id != requester.user_id && !requester.is_admin {
            return Err(AppError::Forbidden(
                "Assessment belongs to another user".to_string(),
            ));
        }

        Ok(assessment)
    }

    /// Joins each answer with its question and the chosen option. Answers
    /// whose question or option no longer resolves are dropped, mirroring an
    /// inner join.
    async fn load_answer_rows(&self, assessment_id: i64) -> AppResult<Vec<AnswerRow>> {
        let answers = self.answers.list_for_assessment(assessment_id).await?;
        if answers.is_empty() {
            return Ok(vec![]);
        }

        let mut question_ids: Vec<i64> = answers.iter().map(|a| a.question_id).collect();
        question_ids.sort_unstable();
        question_ids.dedup();

        let questions = self.questions.list_by_ids(question_ids).await?;
        let by_id: HashMap<i64, _> = questions.into_iter().map(|q| (q.id, q)).collect();

        let rows = answers
            .into_iter()
            .filter_map(|answer| {
                let question = by_id.get(&answer.question_id)?.clone();
                let option = question.option(answer.option_id)?.clone();
                Some(AnswerRow {
                    answer,
                    question,
                    option,
                })
            })
            .collect();

        Ok(rows)
    }

    async fn recommendations_for(&self, scores: &scoring::ScoreMap) -> AppResult<Vec<Career>> {
        let top_codes = scoring::top_riasec_codes(scores, 2);
        let careers = self.careers.list().await?;
        Ok(scoring::match_careers(careers, &top_codes))
    }
}
