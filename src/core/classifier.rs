use crate::domain::model::{ClassifiedEntry, ClassifiedSequence, Classification};

/// 回傳 `"FizzBuzz"`、`"Fizz"`、`"Buzz"` 或 `n` 的十進位字串
pub fn classify(n: i64) -> String {
    Classification::of(n).to_string()
}

/// 依輸入順序逐一分類，輸出長度與輸入相同
pub fn classify_all<I>(numbers: I) -> ClassifiedSequence
where
    I: IntoIterator<Item = i64>,
{
    let entries = numbers
        .into_iter()
        .map(|number| ClassifiedEntry {
            number,
            label: classify(number),
        })
        .collect();
    ClassifiedSequence { entries }
}
