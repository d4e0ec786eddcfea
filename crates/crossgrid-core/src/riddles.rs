/// The built-in bank, as `(answer, clue)` pairs.
pub(crate) const RIDDLES: [(&str, &str); 30] = [
    ("КОТ", "Кто мурлычет у окна и ловит мышей?"),
    ("САД", "Место, где растут деревья и цветы."),
    ("ДОМ", "Место, где живут люди."),
    ("ЛЕС", "Где много деревьев и зверей."),
    ("МОРЕ", "Большая солёная вода."),
    ("ГОРА", "Высокая возвышенность над землёй."),
    ("ЯБЛОКО", "Красный или зелёный плод с семенами внутри."),
    ("ШКОЛА", "Сюда дети ходят за знаниями."),
    ("ОКНО", "Сквозь него видно улицу."),
    ("СТОЛ", "На нём едят и пишут."),
    ("КНИГА", "В ней много страниц с историями."),
    ("РЫБА", "Обитатель воды с плавниками."),
    ("ОЗЕРО", "Большой водоём среди суши."),
    ("ПУСТЫНЯ", "Где много песка и мало воды."),
    ("ТРАВА", "Зелёный ковёр земли летом."),
    ("ЛУНА", "Ночная спутница Земли."),
    ("СОЛНЦЕ", "Звезда, дающая свет и тепло."),
    ("МОСТ", "Строение через реку или овраг."),
    ("ДЕРЕВО", "Растение с корнями, стволом и кроной."),
    ("СКАЗКА", "В ней всё возможно и есть чудеса."),
    ("ГОРОД", "Большой населённый пункт."),
    ("УЛИЦА", "По ней ходят люди и ездят машины."),
    ("МАШИНА", "Железный конь на четырёх колёсах."),
    ("ТЕАТР", "Здесь играют актёры на сцене."),
    ("ФОТО", "Изображение, сделанное камерой."),
    ("КАРТА", "Рисунок местности с дорогами и городами."),
    ("ПАРК", "Зелёное место отдыха в городе."),
    ("ПТИЦА", "Существо с крыльями и перьями."),
    ("РЕКА", "Течёт от истока к устью."),
    ("ВОДА", "Без неё не прожить ни дня."),
];
