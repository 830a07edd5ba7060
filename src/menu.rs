/*!
 * Daily menu planner.
 *
 * Serves a three-course menu (appetizer, main course, dessert) drawn from
 * the public API's random-recipe endpoint. The drawn menu is stored per
 * calendar day, so every request on the same day returns the same three
 * recipes without touching the network. Menus are stored in English;
 * translation is applied at read time through the translation service so
 * it shares the whole-recipe cache with the search flow.
 */

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use log::{debug, info};
use rusqlite::OptionalExtension;
use serde::{Deserialize, Serialize};

use crate::providers::{RecipeApi, RecipeDetail};
use crate::storage::StoreConnection;
use crate::translation::{TranslationService, SOURCE_LANGUAGE};

/// Course tags understood by the random-recipe endpoint
const COURSE_TAGS: [&str; 3] = ["appetizer", "main course", "dessert"];

/// A three-course menu for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMenu {
    /// Calendar day this menu belongs to (YYYY-MM-DD, local time)
    pub date: String,
    /// First course
    pub appetizer: RecipeDetail,
    /// Second course
    pub main_course: RecipeDetail,
    /// Third course
    pub dessert: RecipeDetail,
}

/// Daily menu planner over the public API and the persistent store
pub struct MenuPlanner {
    /// Public recipe-finder client
    recipe_api: Arc<dyn RecipeApi>,
    /// Translation service shared with the search flow
    translator: TranslationService,
    /// Persistent store holding one menu per calendar day
    store: StoreConnection,
}

impl MenuPlanner {
    /// Create a new menu planner
    pub fn new(
        recipe_api: Arc<dyn RecipeApi>,
        translator: TranslationService,
        store: StoreConnection,
    ) -> Self {
        Self {
            recipe_api,
            translator,
            store,
        }
    }

    /// Today's menu in the given display language.
    ///
    /// Draws and stores a new menu only on the first request of the day;
    /// later requests replay the stored one. Translation degrades per
    /// recipe, so a translation outage still yields a usable menu.
    pub async fn menu_for_today(&self, language: &str) -> Result<DailyMenu> {
        let today = Local::now().format("%Y-%m-%d").to_string();
        self.menu_for_date(&today, language).await
    }

    /// The menu for a specific calendar day
    pub async fn menu_for_date(&self, date: &str, language: &str) -> Result<DailyMenu> {
        let menu = match self.load_stored(date).await? {
            Some(menu) => {
                debug!("Replaying stored menu for {}", date);
                menu
            }
            None => {
                info!("No stored menu for {}, drawing a new one", date);
                let menu = self.draw_menu(date).await?;
                self.store_menu(&menu).await?;
                menu
            }
        };

        if language == SOURCE_LANGUAGE {
            return Ok(menu);
        }

        Ok(DailyMenu {
            date: menu.date.clone(),
            appetizer: self
                .translator
                .translate_recipe(&menu.appetizer, language)
                .await
                .into_recipe(),
            main_course: self
                .translator
                .translate_recipe(&menu.main_course, language)
                .await
                .into_recipe(),
            dessert: self
                .translator
                .translate_recipe(&menu.dessert, language)
                .await
                .into_recipe(),
        })
    }

    /// Draw three fresh random recipes, one per course
    async fn draw_menu(&self, date: &str) -> Result<DailyMenu> {
        let mut courses = Vec::with_capacity(COURSE_TAGS.len());
        for tag in COURSE_TAGS {
            let recipe = self
                .recipe_api
                .random_recipe(tag)
                .await
                .with_context(|| format!("Failed to draw a random {} recipe", tag))?;
            courses.push(recipe);
        }

        let mut courses = courses.into_iter();
        Ok(DailyMenu {
            date: date.to_string(),
            appetizer: courses.next().context("Missing appetizer course")?,
            main_course: courses.next().context("Missing main course")?,
            dessert: courses.next().context("Missing dessert course")?,
        })
    }

    /// Load the stored menu for a day, if any. A payload that no longer
    /// deserializes is treated as absent so the day gets redrawn.
    async fn load_stored(&self, date: &str) -> Result<Option<DailyMenu>> {
        let date = date.to_string();
        let payload: Option<String> = self
            .store
            .execute_async(move |conn| {
                conn.query_row(
                    "SELECT payload FROM daily_menu WHERE menu_date = ?1",
                    [&date],
                    |row| row.get(0),
                )
                .optional()
                .context("Failed to query stored menu")
            })
            .await?;

        match payload {
            Some(json) => match serde_json::from_str(&json) {
                Ok(menu) => Ok(Some(menu)),
                Err(e) => {
                    log::warn!("Discarding unreadable stored menu: {}", e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    /// Store a drawn menu under its calendar day
    async fn store_menu(&self, menu: &DailyMenu) -> Result<()> {
        let date = menu.date.clone();
        let payload = serde_json::to_string(menu).context("Failed to serialize menu")?;

        self.store
            .execute_async(move |conn| {
                conn.execute(
                    "INSERT OR REPLACE INTO daily_menu (menu_date, payload, created_at)
                     VALUES (?1, ?2, ?3)",
                    rusqlite::params![date, payload, chrono::Utc::now().to_rfc3339()],
                )
                .context("Failed to store menu")?;
                Ok(())
            })
            .await
    }
}
