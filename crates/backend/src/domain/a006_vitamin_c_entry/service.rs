use super::repository;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use contracts::domain::a001_user::aggregate::UserId;
use contracts::domain::a006_vitamin_c_entry::aggregate::VitaminCEntry;

use crate::shared::time::beginning_of_day_utc;

/// Today's entry, if vitamin C was already given
pub async fn get_today(tz: Tz, now: DateTime<Utc>) -> anyhow::Result<Option<VitaminCEntry>> {
    repository::first_since(beginning_of_day_utc(tz, now)).await
}

/// Flip today's state: remove today's entries if any, otherwise record one
///
/// Returns the entry now standing for today, `None` after a removal.
pub async fn toggle(tz: Tz, now: DateTime<Utc>, user_id: UserId) -> anyhow::Result<Option<VitaminCEntry>> {
    let start = beginning_of_day_utc(tz, now);
    if repository::first_since(start).await?.is_some() {
        let removed = repository::delete_since(start).await?;
        tracing::info!("Vitamin C for today withdrawn ({} entries)", removed);
        Ok(None)
    } else {
        let entry = repository::insert(user_id, now).await?;
        tracing::info!("Vitamin C given by user {}", user_id);
        Ok(Some(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    use crate::shared::data::db::testing;
    use crate::system::users::repository as users;

    #[tokio::test]
    async fn test_toggle_gives_then_withdraws_all_of_today() {
        let _db = testing::database().await;
        let tz = chrono_tz::Europe::Berlin;
        let now = Utc.with_ymd_and_hms(2031, 5, 4, 10, 0, 0).unwrap();
        let yesterday = now - Duration::days(1);
        let user = users::create("vitamin-c-giver").await.unwrap();

        assert!(get_today(tz, now).await.unwrap().is_none());

        let given = toggle(tz, now, user).await.unwrap().expect("vitamin C given");
        assert_eq!(given.user_id, Some(user));
        assert_eq!(get_today(tz, now).await.unwrap(), Some(given));

        // a second entry later the same local day, one the day before
        repository::insert(user, now + Duration::hours(2)).await.unwrap();
        repository::insert(user, yesterday).await.unwrap();

        assert_eq!(toggle(tz, now, user).await.unwrap(), None);
        assert!(get_today(tz, now).await.unwrap().is_none());
        let earlier = get_today(tz, yesterday).await.unwrap().expect("yesterday kept");
        assert_eq!(earlier.utc_date, yesterday);

        assert!(toggle(tz, now, user).await.unwrap().is_some());
    }
}
