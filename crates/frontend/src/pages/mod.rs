//! Заглушки панелей воркбенча.
//!
//! Разметка панелей load/report/positions - внешняя забота; здесь ровно
//! столько, чтобы объявленный набор табов был реальным.

use leptos::prelude::*;

#[component]
pub fn LoadPage() -> impl IntoView {
    view! {
        <div class="page page--load">
            <h2>"Загрузка данных"</h2>
            <p>"Выбор CSV-файла и конфигурации бэктеста."</p>
        </div>
    }
}

#[component]
pub fn ReportPage() -> impl IntoView {
    view! {
        <div class="page page--report">
            <h2>"Отчёт"</h2>
            <p>"Сводные метрики последнего прогона."</p>
        </div>
    }
}

#[component]
pub fn PositionsPage() -> impl IntoView {
    view! {
        <div class="page page--positions">
            <h2>"Закрытые позиции"</h2>
            <p>"Список закрытых позиций бэктеста."</p>
        </div>
    }
}
