//! Templated planting guide
//!
//! One template for every plant and location; only the names change.

/// Title-case every alphabetic run: "jawa barat" -> "Jawa Barat"
///
/// A letter is upper-cased when the preceding character is not a letter
/// and lower-cased otherwise, so "o'neil" becomes "O'Neil".
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}

/// Build the five-section guide for a plant grown at a location
pub fn farm_guide(plant: &str, location: &str) -> String {
    let plant = title_case(plant.trim());
    let location = title_case(location.trim());

    format!(
        "**Panduan Budidaya {plant} di {location}**

**1. Persiapan Lahan untuk {plant}**
- Bersihkan lahan dari gulma dan sisa tanaman sebelumnya.
- Olah tanah sedalam 20-30 cm agar gembur dan beraerasi baik.
- Periksa pH tanah; sebagian besar tanaman tumbuh baik pada pH 5,5-7,0. Tambahkan kapur dolomit bila tanah terlalu asam.
- Berikan pupuk kandang atau kompos 1-2 minggu sebelum tanam.

**2. Penanaman {plant}**
- Gunakan benih atau bibit unggul bersertifikat yang sesuai dengan kondisi {location}.
- Sesuaikan waktu tanam dengan awal musim hujan atau ketersediaan irigasi di {location}.
- Atur jarak tanam sesuai anjuran varietas agar sirkulasi udara dan cahaya cukup.

**3. Perawatan Rutin**
- Siram secara teratur, terutama pada fase awal pertumbuhan dan saat musim kemarau.
- Lakukan penyiangan gulma setiap 2-3 minggu.
- Berikan pupuk susulan (NPK atau pupuk organik cair) sesuai fase pertumbuhan.

**4. Pengendalian Hama dan Penyakit**
- Pantau tanaman minimal seminggu sekali untuk gejala serangan hama atau penyakit.
- Utamakan pengendalian hayati dan pestisida nabati sebelum pestisida kimia.
- Buang dan musnahkan bagian tanaman yang terserang agar tidak menular.

**5. Panen {plant}**
- Panen saat tanaman mencapai umur dan ciri kematangan yang dianjurkan untuk varietasnya.
- Lakukan panen pada pagi hari ketika cuaca cerah.
- Tangani hasil panen dengan hati-hati, lalu keringkan atau simpan di tempat yang sejuk.

*Catatan: Panduan ini bersifat umum untuk budidaya {plant} di {location}. \
Konsultasikan dengan Penyuluh Pertanian Lapangan (PPL) atau Dinas Pertanian setempat \
untuk rekomendasi yang sesuai dengan kondisi tanah dan iklim di {location}.*"
    )
}
