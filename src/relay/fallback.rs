//! Static answers used when no live generation is available
//!
//! Categories are evaluated in a fixed priority order and the first one
//! whose keyword occurs in the question wins. The general menu is the only
//! catch-all.

/// Returned when the conversation is not about a legal topic
pub const OUT_OF_SCOPE_ANSWER: &str = "Maaf, saya hanya dapat membantu menjawab pertanyaan seputar hukum di Indonesia. \
Silakan ajukan pertanyaan terkait hukum, misalnya tentang pasal dalam KUHP, \
undang-undang, kontrak, atau sanksi pidana.";

/// Returned when the conversation contains no user message
pub const NO_QUESTION_ANSWER: &str =
    "Silakan ajukan pertanyaan hukum yang spesifik agar saya dapat membantu Anda.";

const CORRUPTION_ANSWER: &str = "**Tindak Pidana Korupsi di Indonesia**

**Dasar Hukum:**
- UU No. 31 Tahun 1999 jo. UU No. 20 Tahun 2001 tentang Pemberantasan Tindak Pidana Korupsi
- UU No. 30 Tahun 2002 jo. UU No. 19 Tahun 2019 tentang Komisi Pemberantasan Korupsi (KPK)

**Bentuk-bentuk Korupsi:**
1. Merugikan keuangan negara (Pasal 2 dan 3)
2. Suap-menyuap (Pasal 5, 6, 11, 12, 13)
3. Penggelapan dalam jabatan (Pasal 8, 9, 10)
4. Pemerasan (Pasal 12 huruf e, f, g)
5. Gratifikasi yang tidak dilaporkan (Pasal 12B)

**Ancaman Pidana:**
- Pasal 2: penjara seumur hidup atau 4 sampai 20 tahun dan denda Rp200 juta sampai Rp1 miliar
- Pasal 3: penjara seumur hidup atau 1 sampai 20 tahun dan denda Rp50 juta sampai Rp1 miliar

**Cara Melapor:**
Laporkan dugaan korupsi ke KPK (kpk.go.id, telepon 198), Kejaksaan, atau Kepolisian. \
Identitas pelapor dilindungi oleh UU No. 31 Tahun 2014 tentang Perlindungan Saksi dan Korban.

*Informasi ini bersifat umum. Untuk kasus spesifik, konsultasikan dengan advokat atau Lembaga Bantuan Hukum (LBH).*";

const STATUTE_ANSWER: &str = "**Peraturan Perundang-undangan di Indonesia**

**Hierarki (UU No. 12 Tahun 2011 jo. UU No. 13 Tahun 2022):**
1. UUD Negara Republik Indonesia Tahun 1945
2. Ketetapan MPR
3. Undang-Undang / Peraturan Pemerintah Pengganti Undang-Undang
4. Peraturan Pemerintah
5. Peraturan Presiden
6. Peraturan Daerah Provinsi
7. Peraturan Daerah Kabupaten/Kota

**Kitab Undang-Undang Utama:**
- KUHP (UU No. 1 Tahun 2023) mengatur tindak pidana dan sanksinya
- KUHPerdata mengatur hubungan hukum antarperorangan
- KUHAP (UU No. 8 Tahun 1981) mengatur tata cara peradilan pidana

**Cara Mencari Pasal:**
Teks resmi undang-undang dapat diakses melalui peraturan.go.id atau JDIH \
(Jaringan Dokumentasi dan Informasi Hukum) instansi terkait. Sebutkan nomor \
pasal dan nama undang-undangnya agar penjelasan lebih tepat.

*Informasi ini bersifat umum. Untuk kasus spesifik, konsultasikan dengan advokat atau Lembaga Bantuan Hukum (LBH).*";

const CRIMINAL_ANSWER: &str = "**Sanksi Pidana di Indonesia**

**Jenis Pidana (KUHP):**
1. Pidana pokok: pidana penjara, pidana tutupan, pidana pengawasan, pidana denda, dan pidana kerja sosial
2. Pidana tambahan: pencabutan hak tertentu, perampasan barang, pengumuman putusan hakim, dan pembayaran ganti rugi
3. Pidana khusus: pidana mati yang selalu diancamkan secara alternatif

**Proses Peradilan Pidana:**
1. Penyelidikan dan penyidikan oleh Kepolisian
2. Penuntutan oleh Kejaksaan
3. Pemeriksaan dan putusan di Pengadilan Negeri
4. Upaya hukum: banding, kasasi, dan peninjauan kembali

**Hak Tersangka/Terdakwa:**
- Didampingi penasihat hukum sejak pemeriksaan
- Diberitahu sangkaan atau dakwaan dalam bahasa yang dimengerti
- Bantuan hukum cuma-cuma bagi yang tidak mampu (UU No. 16 Tahun 2011)

*Informasi ini bersifat umum. Untuk kasus spesifik, konsultasikan dengan advokat atau Lembaga Bantuan Hukum (LBH).*";

const CIVIL_ANSWER: &str = "**Hukum Perdata dan Perjanjian**

**Syarat Sah Perjanjian (Pasal 1320 KUHPerdata):**
1. Kesepakatan para pihak
2. Kecakapan untuk membuat perikatan
3. Suatu hal tertentu
4. Sebab yang halal

**Wanprestasi:**
Terjadi bila salah satu pihak tidak memenuhi kewajiban, terlambat memenuhinya, \
memenuhi tidak sebagaimana mestinya, atau melakukan hal yang dilarang perjanjian. \
Pihak yang dirugikan dapat menuntut pemenuhan, ganti rugi, atau pembatalan (Pasal 1243 dan 1267 KUHPerdata).

**Penyelesaian Sengketa:**
1. Musyawarah atau negosiasi langsung
2. Mediasi (wajib sebelum pemeriksaan perkara, PERMA No. 1 Tahun 2016)
3. Arbitrase bila diperjanjikan (UU No. 30 Tahun 1999)
4. Gugatan ke Pengadilan Negeri

**Tips:**
Simpan salinan perjanjian, bukti pembayaran, dan korespondensi. Buat perjanjian \
secara tertulis dan bila perlu di hadapan notaris.

*Informasi ini bersifat umum. Untuk kasus spesifik, konsultasikan dengan advokat atau Lembaga Bantuan Hukum (LBH).*";

const GENERAL_ANSWER: &str = "**Layanan Tanya Hukum**

Maaf, layanan AI sedang tidak tersedia sehingga saya belum dapat menjawab \
pertanyaan Anda secara rinci. Berikut topik yang dapat saya bantu:

1. **Korupsi** - tindak pidana korupsi, suap, dan gratifikasi
2. **Peraturan** - pasal, undang-undang, dan KUHP
3. **Pidana** - sanksi pidana dan proses peradilan
4. **Perdata** - kontrak, perjanjian, dan sengketa

**Bantuan Hukum Gratis:**
- Lembaga Bantuan Hukum (LBH) di kota Anda
- Pos Bantuan Hukum (Posbakum) di Pengadilan Negeri
- Organisasi Bantuan Hukum terakreditasi BPHN

*Informasi ini bersifat umum dan bukan pengganti nasihat hukum profesional.*";

/// A keyword group paired with its pre-written answer
#[derive(Debug, Clone)]
pub struct FallbackCategory {
    name: &'static str,
    keywords: Vec<String>,
    answer: String,
}

impl FallbackCategory {
    pub fn new<I, S>(name: &'static str, keywords: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            answer: answer.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Priority-ordered decision table over static answers
#[derive(Debug, Clone)]
pub struct FallbackSynthesizer {
    categories: Vec<FallbackCategory>,
    default_answer: String,
}

impl FallbackSynthesizer {
    /// Built-in legal table: corruption, statute, criminal, civil, then the menu
    pub fn legal() -> Self {
        Self::with_categories(
            vec![
                FallbackCategory::new(
                    "corruption",
                    ["korupsi", "suap", "gratifikasi", "tipikor", "kpk", "pungli"],
                    CORRUPTION_ANSWER,
                ),
                FallbackCategory::new(
                    "statute",
                    ["pasal", "undang", "uu", "kuhp", "peraturan", "perda"],
                    STATUTE_ANSWER,
                ),
                FallbackCategory::new(
                    "criminal",
                    ["pidana", "sanksi", "hukuman", "penjara", "denda"],
                    CRIMINAL_ANSWER,
                ),
                FallbackCategory::new(
                    "civil",
                    [
                        "perdata",
                        "kontrak",
                        "perjanjian",
                        "wanprestasi",
                        "gugatan",
                        "sengketa",
                        "utang",
                    ],
                    CIVIL_ANSWER,
                ),
            ],
            GENERAL_ANSWER,
        )
    }

    /// Build a synthesizer from an explicit table and catch-all answer
    pub fn with_categories(
        categories: Vec<FallbackCategory>,
        default_answer: impl Into<String>,
    ) -> Self {
        Self {
            categories,
            default_answer: default_answer.into(),
        }
    }

    /// The catch-all answer
    pub fn default_answer(&self) -> &str {
        &self.default_answer
    }

    /// Name of the first matching category, `None` for the catch-all
    pub fn category_for(&self, question: &str) -> Option<&'static str> {
        let lowered = question.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.matches(&lowered))
            .map(FallbackCategory::name)
    }

    /// Pick the static answer for a question
    pub fn answer(&self, question: &str) -> &str {
        let lowered = question.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.matches(&lowered))
            .map(FallbackCategory::answer)
            .unwrap_or(&self.default_answer)
    }
}

impl Default for FallbackSynthesizer {
    fn default() -> Self {
        Self::legal()
    }
}
