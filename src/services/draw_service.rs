use rand::Rng;

use crate::database::LotteryStore;
use crate::error::{AppError, AppResult};
use crate::models::*;

/// 按权重选择奖品
///
/// 权重不要求归一化（总和不必为 1）；权重为 0 的奖品不会被选中。
pub fn pick_prize<'a, R: Rng + ?Sized>(prizes: &'a [Prize], rng: &mut R) -> AppResult<&'a Prize> {
    if prizes.is_empty() {
        return Err(AppError::ValidationError(
            "Lottery config has no prizes".to_string(),
        ));
    }

    // 按最大权重缩放，避免极大权重求和溢出
    let max = prizes
        .iter()
        .filter(|p| p.is_drawable())
        .map(|p| p.probability)
        .fold(0.0_f64, f64::max);
    if !(max > 0.0 && max.is_finite()) {
        return Err(AppError::ValidationError(
            "Total prize probability must be positive".to_string(),
        ));
    }
    let total: f64 = prizes
        .iter()
        .filter(|p| p.is_drawable())
        .map(|p| p.probability / max)
        .sum();

    // 浮点累加误差时落到最后一个可抽奖品
    let pick = rng.gen_range(0.0..total);
    let mut acc = 0.0;
    let mut chosen = None;
    for p in prizes.iter().filter(|p| p.is_drawable()) {
        acc += p.probability / max;
        chosen = Some(p);
        if pick < acc {
            break;
        }
    }

    chosen.ok_or_else(|| AppError::InternalError("Prize selection failed".to_string()))
}

#[derive(Clone)]
pub struct DrawService {
    store: LotteryStore,
}

impl DrawService {
    pub fn new(store: LotteryStore) -> Self {
        Self { store }
    }

    /// 抽奖
    ///
    /// 逻辑:
    /// 1. 读取配置
    /// 2. 按权重随机抽取
    /// 3. 以奖品快照生成抽奖记录并保存
    pub async fn draw(&self, config_id: &str) -> AppResult<LotteryRecord> {
        let mut state = self.store.write().await;
        let config = state
            .config(config_id)
            .ok_or_else(|| AppError::NotFound(format!("Lottery config {config_id} not found")))?;

        let prize = pick_prize(&config.prizes, &mut rand::thread_rng())?;
        let record = LotteryRecord::from_draw(config, prize);

        state.records.push(record.clone());
        log::info!(
            "Draw {} on config {} won {} ({})",
            record.id,
            record.config_id,
            record.prize.code,
            record.prize.name
        );
        Ok(record)
    }

    /// 获取抽奖记录（分页，倒序）
    pub async fn list_records(
        &self,
        query: &RecordQuery,
    ) -> AppResult<PaginatedResponse<LotteryRecord>> {
        let params = PaginationParams::new(query.page, query.per_page);
        let state = self.store.read().await;

        let mut matched: Vec<(usize, &LotteryRecord)> = state
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                query
                    .config_id
                    .as_deref()
                    .is_none_or(|config_id| r.config_id == config_id)
            })
            .collect();
        // 时间相同按写入顺序倒排
        matched.sort_by(|(ia, a), (ib, b)| b.timestamp.cmp(&a.timestamp).then(ib.cmp(ia)));

        let total = matched.len() as i64;
        let items: Vec<LotteryRecord> = matched
            .into_iter()
            .skip(params.get_offset() as usize)
            .take(params.get_limit() as usize)
            .map(|(_, r)| r.clone())
            .collect();

        Ok(PaginatedResponse::new(
            items,
            params.get_page(),
            params.get_page_size(),
            total,
        ))
    }

    /// 清空抽奖记录（全部或某个配置），返回删除条数
    pub async fn clear_records(&self, config_id: Option<&str>) -> AppResult<usize> {
        let mut state = self.store.write().await;
        let before = state.records.len();
        match config_id {
            Some(id) => state.records.retain(|r| r.config_id != id),
            None => state.records.clear(),
        }
        let removed = before - state.records.len();
        log::info!("Cleared {removed} lottery record(s)");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ConfigService;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn spring_config() -> LotteryConfig {
        LotteryConfig::new(
            "c1",
            "Spring Draw",
            vec![
                Prize::new("P1", "Gift Card", 0.2),
                Prize::new("P2", "Mug", 0.8),
            ],
        )
    }

    fn store_with(configs: Vec<LotteryConfig>) -> LotteryStore {
        LotteryStore::with_state(crate::database::StoreState {
            configs,
            ..Default::default()
        })
    }

    #[test]
    fn test_pick_prize_never_selects_zero_weight() {
        let prizes = vec![
            Prize::new("A", "Nothing", 0.0),
            Prize::new("B", "Mug", 3.0),
            Prize::new("C", "Pen", 0.0),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            assert_eq!(pick_prize(&prizes, &mut rng).unwrap().code, "B");
        }
    }

    #[test]
    fn test_pick_prize_uses_unnormalized_weights() {
        let prizes = vec![Prize::new("A", "a", 30.0), Prize::new("B", "b", 10.0)];
        let mut rng = StdRng::seed_from_u64(1);
        let hits = (0..4000)
            .filter(|_| pick_prize(&prizes, &mut rng).unwrap().code == "A")
            .count();
        // 期望 3000 次
        assert!((2700..3300).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn test_pick_prize_with_huge_weights() {
        let prizes = vec![
            Prize::new("A", "Alpha", f64::MAX),
            Prize::new("B", "Beta", f64::MAX),
            Prize::new("C", "Nothing", 0.0),
        ];
        let mut rng = StdRng::seed_from_u64(9);
        let hits = (0..2000)
            .filter(|_| pick_prize(&prizes, &mut rng).unwrap().code == "A")
            .count();
        assert!((800..1200).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn test_pick_prize_errors() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pick_prize(&[], &mut rng).is_err());
        assert!(pick_prize(&[Prize::new("A", "a", 0.0)], &mut rng).is_err());
    }

    #[tokio::test]
    async fn test_draw_produces_record_for_config() {
        let store = store_with(vec![spring_config()]);
        let service = DrawService::new(store.clone());

        let record = service.draw("c1").await.unwrap();
        assert_eq!(record.config_id, "c1");
        assert!(record.prize.code == "P1" || record.prize.code == "P2");
        assert_eq!(store.read().await.records.len(), 1);
    }

    #[tokio::test]
    async fn test_draw_unknown_or_empty_config() {
        let store = store_with(vec![LotteryConfig::new("empty", "Empty", vec![])]);
        let service = DrawService::new(store);

        assert!(matches!(
            service.draw("missing").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.draw("empty").await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_record_survives_config_edit_and_delete() {
        let store = LotteryStore::new();
        let configs = ConfigService::new(store.clone());
        let draws = DrawService::new(store.clone());

        let config = configs
            .create_config(CreateConfigRequest {
                title: "Only Mug".to_string(),
                prizes: vec![Prize::new("P1", "Mug", 1.0)],
            })
            .await
            .unwrap();
        let record = draws.draw(&config.id).await.unwrap();

        configs
            .replace_config(
                &config.id,
                UpdateConfigRequest {
                    title: "Only Mug".to_string(),
                    prizes: vec![Prize::new("P1", "Golden Mug", 5.0)],
                },
            )
            .await
            .unwrap();
        configs.delete_config(&config.id).await.unwrap();

        let page = draws.list_records(&RecordQuery::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0], record);
        assert_eq!(page.data[0].prize.name, "Mug");
        assert_eq!(page.data[0].prize.probability, 1.0);
    }

    #[tokio::test]
    async fn test_list_and_clear_records() {
        let mut other = spring_config();
        other.id = "c2".to_string();
        let service = DrawService::new(store_with(vec![spring_config(), other]));

        for _ in 0..3 {
            service.draw("c1").await.unwrap();
        }
        service.draw("c2").await.unwrap();

        let page = service
            .list_records(&RecordQuery {
                config_id: Some("c1".to_string()),
                page: Some(1),
                per_page: Some(2),
            })
            .await
            .unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total_pages, 2);
        assert!(page.data[0].timestamp >= page.data[1].timestamp);

        assert_eq!(service.clear_records(Some("c1")).await.unwrap(), 3);
        assert_eq!(service.clear_records(None).await.unwrap(), 1);
        let page = service.list_records(&RecordQuery::default()).await.unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_records_with_same_timestamp_newest_first() {
        let config = spring_config();
        let mut first = LotteryRecord::from_draw(&config, &config.prizes[0]);
        let mut second = LotteryRecord::from_draw(&config, &config.prizes[1]);
        second.timestamp = first.timestamp;
        first.id = "first".to_string();
        second.id = "second".to_string();

        let service = DrawService::new(LotteryStore::with_state(crate::database::StoreState {
            configs: vec![config],
            records: vec![first, second],
            ..Default::default()
        }));

        let page = service.list_records(&RecordQuery::default()).await.unwrap();
        let ids: Vec<&str> = page.data.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["second", "first"]);
    }
}
