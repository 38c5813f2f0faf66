//! 排序集合 (Hero / Product / Service)
//!
//! 管理后台通过 "上移 / 下移" 交换相邻两项的 `order` 值，然后把
//! `(id, order)` 对提交到 `PUT /…/reorder`。这里实现服务端的两个操作：
//!
//! - `list`: 按 `order ASC, createdAt DESC, id ASC` 返回，可选 active 过滤
//! - `reorder`: 每一对独立更新，并发执行；不存在的 id 跳过，单对失败不影响其他对
//!
//! 没有锁也没有版本号：同一字段最后写入者生效。

use futures::future::join_all;
use serde_json::Value;
use shared::ordering::{OrderUpdate, Orderable, ReorderReport, ReorderRequest, sort_canonical};

use crate::db::repository::{ListFilter, RepoResult, UpdateOutcome};
use crate::utils::{AppError, AppResult};

/// Persistence seam used by the ordering core
#[allow(async_fn_in_trait)]
pub trait OrderedRepository {
    type Item: Orderable;

    /// Items matching `filter`, canonically sorted
    async fn find_sorted(&self, filter: ListFilter) -> RepoResult<Vec<Self::Item>>;

    /// Set the `order` of one item
    async fn update_order(&self, id: &str, order: i64) -> RepoResult<UpdateOutcome>;
}

/// One collection of orderable documents
pub struct OrderedCollectionStore<R> {
    repo: R,
    kind: &'static str,
}

impl<R: OrderedRepository> OrderedCollectionStore<R> {
    pub fn new(repo: R, kind: &'static str) -> Self {
        Self { repo, kind }
    }

    /// List items in display order
    pub async fn list(&self, filter: ListFilter) -> RepoResult<Vec<R::Item>> {
        let mut items = self.repo.find_sorted(filter).await?;
        sort_canonical(&mut items);
        Ok(items)
    }

    /// Apply a batch of `(id, order)` pairs
    ///
    /// Pairs are applied concurrently and independently. The batch itself
    /// never fails; the report says what happened to each pair.
    pub async fn reorder(&self, updates: &[OrderUpdate]) -> ReorderReport {
        let results = join_all(
            updates
                .iter()
                .map(|u| self.repo.update_order(&u.id, u.order)),
        )
        .await;

        let mut report = ReorderReport::default();
        for (update, result) in updates.iter().zip(results) {
            match result {
                Ok(UpdateOutcome::Updated) => report.updated += 1,
                Ok(UpdateOutcome::NotFound) => {
                    tracing::debug!(kind = self.kind, id = %update.id, "Reorder skipped unknown id");
                    report.skipped += 1;
                }
                Err(e) => {
                    tracing::error!(
                        kind = self.kind,
                        id = %update.id,
                        order = update.order,
                        error = %e,
                        "Reorder update failed"
                    );
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            kind = self.kind,
            updated = report.updated,
            skipped = report.skipped,
            failed = report.failed,
            "Reorder applied"
        );
        report
    }
}

/// Validate a raw reorder body into its pairs
///
/// Accepts `{"items": [...]}` or the collection-named key (`slides`,
/// `products`, `services`); every entry needs a string `_id` (or `id`) and
/// an integer `order`.
pub fn parse_reorder_body(body: Value) -> AppResult<Vec<OrderUpdate>> {
    serde_json::from_value::<ReorderRequest>(body)
        .map(|request| request.items)
        .map_err(|e| AppError::reorder_payload(format!("Invalid reorder payload: {}", e)))
}
